//! Color literals and the per-conversion registry of custom colors.

use std::collections::BTreeMap;

use tracing::debug;

/// Colors every LaTeX installation knows through xcolor.
const NAMED_COLORS: &[&str] = &[
    "black",
    "white",
    "red",
    "green",
    "blue",
    "yellow",
    "cyan",
    "magenta",
    "gray",
    "darkgray",
    "lightgray",
    "brown",
    "lime",
    "olive",
    "orange",
    "pink",
    "purple",
    "teal",
    "violet",
];

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Deterministic LaTeX color name, e.g. `colorff6b6b`.
    pub fn identifier(&self) -> String {
        format!("color{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Parsed form of a color literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Built-in xcolor name.
    Named(&'static str),
    /// Needs a `\definecolor` before use.
    Rgb(Rgb),
    Unrecognized,
}

impl ColorSpec {
    /// Parses a named color, `#RRGGBB`, `#RGB` or `rgb(r, g, b)`.
    /// Whitespace and case are ignored.
    pub fn parse(literal: &str) -> Self {
        let compact: String = literal
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        if let Some(name) = NAMED_COLORS.iter().find(|name| **name == compact) {
            return ColorSpec::Named(name);
        }
        if let Some(hex) = compact.strip_prefix('#') {
            return parse_hex(hex).map_or(ColorSpec::Unrecognized, ColorSpec::Rgb);
        }
        if let Some(args) = compact
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_decimal(args).map_or(ColorSpec::Unrecognized, ColorSpec::Rgb);
        }
        ColorSpec::Unrecognized
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // #abc is shorthand for #aabbcc
        3 => Some(Rgb::new(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

fn parse_decimal(args: &str) -> Option<Rgb> {
    let mut parts = args.split(',').map(|part| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse::<u8>().ok()
    });
    let rgb = Rgb::new(parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() {
        return None;
    }
    Some(rgb)
}

/// A color introduced by the conversion, with channels in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomColor {
    pub name: String,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl CustomColor {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            name: rgb.identifier(),
            red: f64::from(rgb.red) / 255.0,
            green: f64::from(rgb.green) / 255.0,
            blue: f64::from(rgb.blue) / 255.0,
        }
    }

    /// `\definecolor` line for the document preamble.
    pub fn definition(&self) -> String {
        format!(
            "\\definecolor{{{}}}{{rgb}}{{{:.3},{:.3},{:.3}}}",
            self.name, self.red, self.green, self.blue
        )
    }
}

/// Custom colors used by one conversion.
///
/// Each identifier is registered at most once; definitions render in
/// identifier order so output is stable.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    colors: BTreeMap<String, CustomColor>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a color literal to the name used in markup, registering it
    /// when it is a custom color. Returns `None` for unrecognized literals.
    pub fn resolve(&mut self, literal: &str) -> Option<String> {
        match ColorSpec::parse(literal) {
            ColorSpec::Named(name) => Some(name.to_string()),
            ColorSpec::Rgb(rgb) => {
                let color = self
                    .colors
                    .entry(rgb.identifier())
                    .or_insert_with(|| CustomColor::from_rgb(rgb));
                Some(color.name.clone())
            }
            ColorSpec::Unrecognized => {
                debug!(literal, "Unrecognized color literal, dropping style");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomColor> {
        self.colors.values()
    }

    /// Preamble block defining every registered color, or an empty string.
    pub fn definitions(&self) -> String {
        if self.colors.is_empty() {
            return String::new();
        }
        let mut block = String::from("% Auto-generated color definitions\n");
        for color in self.colors.values() {
            block.push_str(&color.definition());
            block.push('\n');
        }
        block
    }
}
