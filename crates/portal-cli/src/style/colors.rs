//! Tones used to color access decisions.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};

/// How a piece of output should read at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// A check passed.
    Granted,
    /// A check failed.
    Denied,
    /// Worth a second look, e.g. a high-risk permission.
    Caution,
    /// Secondary detail.
    Quiet,
    /// Section titles.
    Heading,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Granted => Style::new().green().bold(),
            Self::Denied => Style::new().red().bold(),
            Self::Caution => Style::new().yellow(),
            Self::Quiet => Style::new().dimmed(),
            Self::Heading => Style::new().bold(),
        }
    }
}

/// Renders any displayable value in a [`Tone`].
pub trait Toned: Display + Sized {
    fn toned(&self, tone: Tone) -> String {
        if super::no_color() {
            self.to_string()
        } else {
            self.style(tone.style()).to_string()
        }
    }

    fn granted(&self) -> String {
        self.toned(Tone::Granted)
    }

    fn denied(&self) -> String {
        self.toned(Tone::Denied)
    }

    fn caution(&self) -> String {
        self.toned(Tone::Caution)
    }

    fn quiet(&self) -> String {
        self.toned(Tone::Quiet)
    }

    fn heading(&self) -> String {
        self.toned(Tone::Heading)
    }
}

impl<T: Display> Toned for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_strips_escapes() {
        super::super::set_no_color(true);
        assert_eq!("granted".granted(), "granted");
        assert_eq!("team.remove".caution(), "team.remove");
    }
}
