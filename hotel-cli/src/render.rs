use hotel_core::registry::{Guest, Registry};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Cyan,
    Yellow,
    Magenta,
}

impl Color {
    fn ansi(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Cyan => "\x1b[36m",
            Color::Yellow => "\x1b[33m",
            Color::Magenta => "\x1b[35m",
        }
    }
}

const RESET: &str = "\x1b[0m";
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Terminal styling. With `ansi` off nothing but plain text is written, which
/// is what tests and piped output want.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub ansi: bool,
}

impl Palette {
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.ansi {
            format!("{}{}{}", color.ansi(), text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn clear(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.ansi {
            out.write_all(CLEAR.as_bytes())?;
        }
        Ok(())
    }
}

/// Presentational delays, all derived from the base frame delay.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub frame: Duration,
}

impl Pacing {
    pub fn new(frame_ms: u64) -> Self {
        Self {
            frame: Duration::from_millis(frame_ms),
        }
    }

    fn sleep(d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }

    pub fn frame(&self) {
        Self::sleep(self.frame);
    }

    pub fn check_in(&self) {
        Self::sleep(self.frame / 2);
    }

    pub fn guest_line(&self) {
        Self::sleep(self.frame * 3);
    }

    pub fn triangular_line(&self) {
        Self::sleep(self.frame * 5 / 2);
    }

    pub fn error_notice(&self) {
        Self::sleep(self.frame * 10);
    }
}

pub const WELCOME_ART: &str = r"
      ___________________________
     |                           |
     |  Grand Hotel: Infinity    |
     |___________________________|
             ||
       __     ||     __
      |  |____||____|  |
      |__|    ||    |__|
      ||      ||      ||
      ||      ||      ||
     [==]    [==]    [==]

   The hotel receptionist greets you warmly!

   (The receptionist stands at the bar, bathed in the glow of seductive lamps)
";

pub fn write_hotel(out: &mut dyn Write, palette: &Palette, hotel: &Registry) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        palette.paint(Color::Yellow, "Hotel status (room number : guest):")
    )?;
    for (i, slot) in hotel.slots().iter().enumerate() {
        let occupant = match slot {
            None => "[Empty]".to_string(),
            Some(guest @ Guest::New(_)) => palette.paint(Color::Green, &guest.to_string()),
            Some(guest) => guest.to_string(),
        };
        writeln!(out, "Room {:>3} : {}", i + 1, occupant)?;
    }
    writeln!(out, "\n{}", palette.paint(Color::Magenta, "Count: \u{221e} (Infinity)"))
}

pub fn write_explanation(out: &mut dyn Write, palette: &Palette, text: &str) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint(Color::Cyan, "Theoretical Explanation:"))?;
    writeln!(out, "{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_writes_no_escapes() {
        let palette = Palette { ansi: false };
        assert_eq!(palette.paint(Color::Green, "hi"), "hi");
        let mut out = Vec::new();
        palette.clear(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn ansi_palette_wraps_text() {
        let palette = Palette { ansi: true };
        assert_eq!(palette.paint(Color::Cyan, "x"), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn hotel_listing() {
        let mut hotel = Registry::fully_occupied(3);
        hotel.shift_right(Guest::New(1000), |_, _| {});
        let mut out = Vec::new();
        write_hotel(&mut out, &Palette { ansi: false }, &hotel).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Room   1 : New Guest 1000"));
        assert!(text.contains("Room   3 : Guest 2"));
        assert!(text.contains("Count: \u{221e} (Infinity)"));
    }
}
