use rand::Rng;
use std::fmt;
use tracing::debug;

/// Identifier handed to the guest placed by the single-newcomer shift.
pub const NEWCOMER_ID: u32 = 1000;

/// New guest identifiers drawn for the doubling shift are four digits long.
pub const NEW_GUEST_IDS: std::ops::RangeInclusive<u32> = 1000..=9999;

/// Which half of a shift produced a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An existing guest changed rooms (or left the row).
    Move,
    /// A new guest was placed in a free room.
    CheckIn,
}

/// Occupant of one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guest {
    /// Someone who was already staying when the demo started.
    Original(u32),
    /// Someone admitted by the shift.
    New(u32),
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guest::Original(id) => write!(f, "Guest {id}"),
            Guest::New(id) => write!(f, "New Guest {id}"),
        }
    }
}

/// Fixed-length row of rooms. Slot `i` is room `i + 1`.
///
/// The number of slots never changes; shifting past the last room drops the
/// occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    slots: Vec<Option<Guest>>,
}

impl Registry {
    pub fn empty(rooms: usize) -> Self {
        Self {
            slots: vec![None; rooms],
        }
    }

    /// Every room taken, room `k` by original guest `k`.
    pub fn fully_occupied(rooms: usize) -> Self {
        Self {
            slots: (1..=rooms)
                .map(|id| Some(Guest::Original(id as u32)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<Guest>] {
        &self.slots
    }

    pub fn get(&self, slot: usize) -> Option<Guest> {
        self.slots.get(slot).copied().flatten()
    }

    /// Moves everybody one room up and puts `newcomer` in room 1.
    ///
    /// Walks from the last slot down to the first; `on_step` sees the row after
    /// each slot has been handled, then once more after the newcomer arrives.
    pub fn shift_right<F>(&mut self, newcomer: Guest, mut on_step: F)
    where
        F: FnMut(Step, &Registry),
    {
        let n = self.slots.len();
        for i in (0..n).rev() {
            if let Some(guest) = self.slots[i].take() {
                if i + 1 < n {
                    self.slots[i + 1] = Some(guest);
                } else {
                    debug!(?guest, "dropped past the last room");
                }
            }
            on_step(Step::Move, self);
        }
        if let Some(first) = self.slots.first_mut() {
            *first = Some(newcomer);
        }
        on_step(Step::CheckIn, self);
    }

    /// Moves the guest of room `k` to room `2k`, then fills every vacated
    /// room with a new guest whose identifier is drawn from [`NEW_GUEST_IDS`].
    ///
    /// `on_step` sees a [`Step::Move`] frame per original slot and a
    /// [`Step::CheckIn`] frame per admitted guest.
    pub fn shift_to_even<R, F>(&mut self, rng: &mut R, mut on_step: F)
    where
        R: Rng,
        F: FnMut(Step, &Registry),
    {
        let n = self.slots.len();
        let previous = std::mem::replace(&mut self.slots, vec![None; n]);
        for (i, guest) in previous.into_iter().enumerate() {
            let target = 2 * (i + 1) - 1;
            if target < n {
                self.slots[target] = guest;
            } else if let Some(guest) = guest {
                debug!(?guest, room = target + 1, "target room is beyond the row");
            }
            on_step(Step::Move, self);
        }
        for i in 0..n {
            if self.slots[i].is_none() {
                self.slots[i] = Some(Guest::New(rng.gen_range(NEW_GUEST_IDS)));
                on_step(Step::CheckIn, self);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shift_right_frees_room_one() {
        let mut hotel = Registry::fully_occupied(5);
        let mut frames = 0;
        hotel.shift_right(Guest::New(NEWCOMER_ID), |_, _| frames += 1);

        assert_eq!(hotel.len(), 5);
        assert_eq!(hotel.get(0), Some(Guest::New(NEWCOMER_ID)));
        for slot in 1..5 {
            assert_eq!(hotel.get(slot), Some(Guest::Original(slot as u32)));
        }
        assert!(!hotel.slots().contains(&Some(Guest::Original(5))));
        assert_eq!(frames, 6);
    }

    #[test]
    fn shift_right_intermediate_frames_leave_a_hole() {
        let mut hotel = Registry::fully_occupied(3);
        let mut seen = Vec::new();
        hotel.shift_right(Guest::New(1), |step, r| seen.push((step, r.slots().to_vec())));

        // last guest dropped, room 3 empty
        assert_eq!(
            seen[0],
            (
                Step::Move,
                vec![Some(Guest::Original(1)), Some(Guest::Original(2)), None]
            )
        );
        // room 1 vacated just before the newcomer arrives
        assert_eq!(seen[2].1[0], None);
        assert_eq!(seen[3].0, Step::CheckIn);
    }

    #[test]
    fn shift_to_even_places_originals_in_odd_slots() {
        let mut hotel = Registry::fully_occupied(6);
        let mut rng = StdRng::seed_from_u64(7);
        let mut moves = 0;
        let mut check_ins = 0;
        hotel.shift_to_even(&mut rng, |step, _| match step {
            Step::Move => moves += 1,
            Step::CheckIn => check_ins += 1,
        });

        assert_eq!(hotel.get(1), Some(Guest::Original(1)));
        assert_eq!(hotel.get(3), Some(Guest::Original(2)));
        assert_eq!(hotel.get(5), Some(Guest::Original(3)));
        for slot in [0, 2, 4] {
            match hotel.get(slot) {
                Some(Guest::New(id)) => assert!(NEW_GUEST_IDS.contains(&id)),
                other => panic!("slot {slot} holds {other:?}"),
            }
        }
        assert_eq!(moves, 6);
        assert_eq!(check_ins, 3);
    }

    #[test]
    fn shift_to_even_single_room() {
        let mut hotel = Registry::fully_occupied(1);
        let mut rng = StdRng::seed_from_u64(1);
        hotel.shift_to_even(&mut rng, |_, _| {});
        assert!(matches!(hotel.get(0), Some(Guest::New(_))));
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let mut hotel = Registry::empty(0);
        hotel.shift_right(Guest::New(1), |_, _| {});
        assert!(hotel.is_empty());
    }

    #[test]
    fn guest_display() {
        assert_eq!(Guest::Original(4).to_string(), "Guest 4");
        assert_eq!(Guest::New(1234).to_string(), "New Guest 1234");
    }
}
