use crate::prompt::{InputError, Prompter};
use crate::render::{self, Color, Pacing, Palette};
use hotel_core::encode;
use hotel_core::registry::{Guest, NEWCOMER_ID, Registry, Step};
use hotel_core::theory::{self, METHODS, MethodInfo, THEORY_MENU_LABEL};
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Everything a method needs while it runs.
pub struct Session<'a> {
    pub prompt: Prompter<'a>,
    pub palette: Palette,
    pub pacing: Pacing,
    pub rng: StdRng,
    pub rooms: usize,
}

impl Session<'_> {
    fn heading(&mut self, title: &str) -> io::Result<()> {
        self.palette.clear(self.prompt.out)?;
        let line = self.palette.paint(Color::Yellow, &format!("{title}:"));
        writeln!(self.prompt.out, "{line}\n")
    }

    fn explain(&mut self, info: &MethodInfo) -> io::Result<()> {
        render::write_explanation(self.prompt.out, &self.palette, info.explanation)
    }
}

/// Main menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Run(u8),
}

impl FromStr for Selection {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(0) => Ok(Selection::Exit),
            Ok(n @ 1..=9) => Ok(Selection::Run(n)),
            _ => Err(InputError::InvalidMenuSelection(s.trim().to_string())),
        }
    }
}

/// One entry of the main menu.
pub trait Simulation {
    fn number(&self) -> u8;
    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError>;
}

fn info(number: u8) -> &'static MethodInfo {
    &METHODS[usize::from(number) - 1]
}

struct NewVisitor;
struct InfiniteVisitors;
struct PrimePower;
struct Factorization;
struct Interleaving;
struct Triangular;
struct HigherInfinity;
struct BinaryEncoding;
struct Theory;

/// Handler for a menu number in `1..=9`.
pub fn handler(number: u8) -> Option<&'static dyn Simulation> {
    let sim: &'static dyn Simulation = match number {
        1 => &NewVisitor,
        2 => &InfiniteVisitors,
        3 => &PrimePower,
        4 => &Factorization,
        5 => &Interleaving,
        6 => &Triangular,
        7 => &HigherInfinity,
        8 => &BinaryEncoding,
        9 => &Theory,
        _ => return None,
    };
    Some(sim)
}

fn draw_frame(
    out: &mut dyn Write,
    palette: &Palette,
    caption: &str,
    hotel: &Registry,
) -> io::Result<()> {
    palette.clear(out)?;
    writeln!(out, "{caption}\n")?;
    render::write_hotel(out, palette, hotel)
}

impl Simulation for NewVisitor {
    fn number(&self) -> u8 {
        1
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let Session {
            prompt,
            palette,
            pacing,
            rooms,
            ..
        } = session;
        let mut hotel = Registry::fully_occupied(*rooms);
        let mut drawn: io::Result<()> = Ok(());
        hotel.shift_right(Guest::New(NEWCOMER_ID), |step, h| match step {
            _ if drawn.is_err() => {}
            Step::Move => {
                drawn = draw_frame(
                    prompt.out,
                    palette,
                    "Resettlement (New Visitor): shifting guests (room n \u{2192} room n+1)...",
                    h,
                );
                pacing.frame();
            }
            Step::CheckIn => {
                let caption =
                    palette.paint(Color::Green, "A brand new guest has checked into room 1!");
                drawn = draw_frame(prompt.out, palette, &caption, h);
            }
        });
        drawn?;
        info!(rooms = hotel.len(), "new visitor placed in room 1");
        session.explain(info(self.number()))?;
        Ok(())
    }
}

impl Simulation for InfiniteVisitors {
    fn number(&self) -> u8 {
        2
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let Session {
            prompt,
            palette,
            pacing,
            rng,
            rooms,
        } = session;
        let mut hotel = Registry::fully_occupied(*rooms);
        let mut drawn: io::Result<()> = Ok(());
        let mut admitted = 0usize;
        hotel.shift_to_even(rng, |step, h| match step {
            _ if drawn.is_err() => {}
            Step::Move => {
                drawn = draw_frame(
                    prompt.out,
                    palette,
                    "Resettlement (Infinite Visitors): shifting guests (room n \u{2192} room 2*n)...",
                    h,
                );
                pacing.frame();
            }
            Step::CheckIn => {
                admitted += 1;
                drawn = draw_frame(prompt.out, palette, "Checking in new guests...", h);
                pacing.check_in();
            }
        });
        drawn?;
        let caption = palette.paint(
            Color::Green,
            "Infinite new guests have been checked in to the vacant (odd) rooms!",
        );
        palette.clear(prompt.out)?;
        writeln!(prompt.out, "{caption}\n")?;
        render::write_hotel(prompt.out, palette, &hotel)?;
        info!(admitted, "new guests checked in");
        session.explain(info(self.number()))?;
        Ok(())
    }
}

impl Simulation for PrimePower {
    fn number(&self) -> u8 {
        3
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let count =
            session.prompt.ask_count("Enter number of original guests to reassign (e.g., 8): ")?;
        for i in 1..=count {
            let room = encode::original_guest_room(i);
            writeln!(session.prompt.out, "Guest from room {i} \u{2192} New room: {room}")?;
            session.pacing.guest_line();
        }
        writeln!(session.prompt.out, "\nNow, for additional passengers:")?;
        let bus = session
            .prompt
            .ask_u32("Enter bus number (1 for first bus, 2 for second, etc.): ")?;
        let seat = session.prompt.ask_exponent("Enter seat number: ")?;
        let room = encode::passenger_room(bus, seat)?;
        writeln!(
            session.prompt.out,
            "\nPassenger from bus {bus} seat {seat} \u{2192} Room: {room}"
        )?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for Factorization {
    fn number(&self) -> u8 {
        4
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let bus = session.prompt.ask_exponent("Enter bus number (c): ")?;
        let seat = session.prompt.ask_exponent("Enter seat number (n): ")?;
        let room = encode::factorization_room(bus, seat);
        writeln!(
            session.prompt.out,
            "\nFor passenger (bus {bus}, seat {seat}) \u{2192} Room: {room}"
        )?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for Interleaving {
    fn number(&self) -> u8 {
        5
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let bus = session.prompt.ask("Enter bus number: ")?;
        let seat = session.prompt.ask("Enter seat number: ")?;
        let room = encode::interleave_digits(&bus, &seat)?;
        writeln!(session.prompt.out, "\nInterleaved room number: {room}")?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for Triangular {
    fn number(&self) -> u8 {
        6
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let count = session.prompt.ask_count("Enter number of original guests (e.g., 8): ")?;
        for n in 1..=count {
            let room = encode::triangular(u64::from(n));
            writeln!(
                session.prompt.out,
                "Guest from room {n} \u{2192} New room: T({n}) = {room}"
            )?;
            session.pacing.triangular_line();
        }
        writeln!(session.prompt.out, "\nFor additional passenger:")?;
        let bus = session.prompt.ask_u32("Enter bus number: ")?;
        let seat = session.prompt.ask_u32("Enter seat number: ")?;
        let room = encode::passenger_triangular_room(bus, seat);
        writeln!(
            session.prompt.out,
            "Passenger from bus {bus} seat {seat} \u{2192} Room: {room}"
        )?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for HigherInfinity {
    fn number(&self) -> u8 {
        7
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let ferry = session.prompt.ask_exponent("Enter ferry number: ")?;
        let bus = session.prompt.ask_exponent("Enter bus number: ")?;
        let seat = session.prompt.ask_exponent("Enter seat number: ")?;
        let room = encode::higher_infinity_room(ferry, bus, seat);
        writeln!(
            session.prompt.out,
            "\nPassenger (ferry {ferry}, bus {bus}, seat {seat}) \u{2192} Room: {room}"
        )?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for BinaryEncoding {
    fn number(&self) -> u8 {
        8
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        let info = info(self.number());
        session.heading(info.title)?;
        let raw = session.prompt.ask(
            "Enter guest address as numbers separated by '-' (e.g., 2-5-4-3-1): ",
        )?;
        let address = encode::parse_address(&raw)?;
        let room = encode::binary_encoding(&address);
        debug!(bits = %encode::binary_string(&address), "binary group encoding");
        writeln!(
            session.prompt.out,
            "\nFor guest with address {raw} \u{2192} Room (binary encoded): {room}"
        )?;
        session.explain(info)?;
        Ok(())
    }
}

impl Simulation for Theory {
    fn number(&self) -> u8 {
        9
    }

    fn run(&self, session: &mut Session<'_>) -> Result<(), InputError> {
        session.palette.clear(session.prompt.out)?;
        let text = session.palette.paint(Color::Green, &theory::theory_text());
        writeln!(session.prompt.out, "\n{text}")?;
        Ok(())
    }
}

enum State {
    MainMenu,
    Running(&'static dyn Simulation),
    Terminated,
}

fn show_main_menu(session: &mut Session<'_>) -> io::Result<()> {
    let palette = session.palette;
    let out = &mut *session.prompt.out;
    palette.clear(out)?;
    writeln!(out, "{}", palette.paint(Color::Cyan, render::WELCOME_ART))?;
    writeln!(out, "\n{}", palette.paint(Color::Yellow, "Choose an occupancy method:"))?;
    for m in &METHODS {
        writeln!(out, "{}. {}", m.number, m.menu_label)?;
    }
    writeln!(out, "9. {THEORY_MENU_LABEL}")?;
    writeln!(out, "0. Exit")?;
    Ok(())
}

/// Runs the menu until the user picks 0 or input runs out.
///
/// Only I/O failures on the terminal escape; bad answers are reported and the
/// menu comes back.
pub fn run(session: &mut Session<'_>) -> Result<(), InputError> {
    let mut state = State::MainMenu;
    loop {
        state = match state {
            State::MainMenu => {
                show_main_menu(session)?;
                match session.prompt.ask("\nYour choice: ") {
                    Ok(answer) => match answer.parse::<Selection>() {
                        Ok(Selection::Exit) => State::Terminated,
                        Ok(Selection::Run(n)) => match handler(n) {
                            Some(sim) => {
                                debug!(selection = n, "running method");
                                State::Running(sim)
                            }
                            None => State::MainMenu,
                        },
                        Err(e) => {
                            warn!(%e, "rejected menu selection");
                            writeln!(session.prompt.out, "\n{e}")?;
                            session.pacing.error_notice();
                            State::MainMenu
                        }
                    },
                    Err(InputError::EndOfInput) => State::Terminated,
                    Err(e) if e.is_recoverable() => {
                        warn!(%e, "unreadable menu selection");
                        writeln!(session.prompt.out, "\nInvalid choice: {e}. Please try again.")?;
                        session.pacing.error_notice();
                        State::MainMenu
                    }
                    Err(e) => return Err(e),
                }
            }
            State::Running(sim) => match sim.run(session) {
                Ok(()) => after_method(session)?,
                Err(InputError::EndOfInput) => State::Terminated,
                Err(e) if e.is_recoverable() => {
                    warn!(method = sim.number(), %e, "method aborted");
                    let line = session.palette.paint(Color::Magenta, &format!("Error: {e}"));
                    writeln!(session.prompt.out, "\n{line}")?;
                    after_method(session)?
                }
                Err(e) => return Err(e),
            },
            State::Terminated => break,
        };
    }
    session.palette.clear(session.prompt.out)?;
    let farewell = session
        .palette
        .paint(Color::Green, "Thank you for exploring the Grand Hotel Paradox!");
    writeln!(session.prompt.out, "\n{farewell}")?;
    Ok(())
}

fn after_method(session: &mut Session<'_>) -> Result<State, InputError> {
    match session.prompt.wait_for_enter() {
        Ok(()) => Ok(State::MainMenu),
        Err(InputError::EndOfInput) => Ok(State::Terminated),
        Err(e) => Err(e),
    }
}
