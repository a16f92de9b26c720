//! SGR (Select Graphic Rendition) interpretation.
//!
//! Turns the parameter list of a `CSI ... m` sequence into a new
//! [`StyleState`]. Only the sixteen-color palette and the bold / italic /
//! underline attributes are modeled; extended color forms are not.

/// One of the sixteen palette colors addressable by SGR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    const PALETTE: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Palette entry for index 0-15 (0-7 standard, 8-15 bright).
    pub fn from_index(index: u16) -> Option<Self> {
        Self::PALETTE.get(usize::from(index)).copied()
    }

    /// Color literal used when this entry colors text.
    pub fn foreground_literal(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "lime",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::BrightBlack => "gray",
            AnsiColor::BrightRed => "#FF6B6B",
            AnsiColor::BrightGreen => "#4ECB71",
            AnsiColor::BrightYellow => "#FFD93D",
            AnsiColor::BrightBlue => "#82AAFF",
            AnsiColor::BrightMagenta => "#C792EA",
            AnsiColor::BrightCyan => "#89DDFF",
            AnsiColor::BrightWhite => "white",
        }
    }

    /// Color literal used when this entry fills the background.
    pub fn background_literal(self) -> &'static str {
        match self {
            // lime is too bright behind text
            AnsiColor::Green => "green",
            other => other.foreground_literal(),
        }
    }
}

/// Text attributes in effect at a point of the stream.
///
/// The default value is the reset state: no colors, no attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    pub foreground: Option<AnsiColor>,
    pub background: Option<AnsiColor>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Apply SGR parameters to `previous`, returning the resulting state.
///
/// Parameters are processed left to right. A `0` anywhere resets to the
/// default state immediately, discarding whatever earlier parameters in the
/// same list set. Unknown and non-numeric parameters are ignored.
pub fn interpret_sgr(params: &[&str], previous: &StyleState) -> StyleState {
    if params.is_empty() || params == ["0"] || params == [""] {
        return StyleState::default();
    }

    let mut state = *previous;
    for param in params {
        let Ok(code) = param.parse::<u16>() else {
            continue;
        };
        match code {
            0 => return StyleState::default(),
            1 => state.bold = true,
            3 => state.italic = true,
            4 => state.underline = true,
            22 => state.bold = false,
            23 => state.italic = false,
            24 => state.underline = false,
            30..=37 => state.foreground = AnsiColor::from_index(code - 30),
            39 => state.foreground = None,
            40..=47 => state.background = AnsiColor::from_index(code - 40),
            49 => state.background = None,
            90..=97 => state.foreground = AnsiColor::from_index(code - 90 + 8),
            100..=107 => state.background = AnsiColor::from_index(code - 100 + 8),
            _ => {}
        }
    }
    state
}
