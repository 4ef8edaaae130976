use owo_colors::{AnsiColors, DynColors, OwoColorize};

/// Symbolic colors understood by a [`Colorizer`].
///
/// A color carries no behaviour of its own; it is only a key passed to the
/// colorizer. `Grey` and `Gray` are interchangeable spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Gold,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    Gray,
    Ruby,
    Leaf,
    Yellow,
    Ocean,
    Pink,
    Sky,
    Light,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 18] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Gold,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Grey,
        Color::Gray,
        Color::Ruby,
        Color::Leaf,
        Color::Yellow,
        Color::Ocean,
        Color::Pink,
        Color::Sky,
        Color::Light,
    ];

    /// Lowercase name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Gold => "gold",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Grey => "grey",
            Color::Gray => "gray",
            Color::Ruby => "ruby",
            Color::Leaf => "leaf",
            Color::Yellow => "yellow",
            Color::Ocean => "ocean",
            Color::Pink => "pink",
            Color::Sky => "sky",
            Color::Light => "light",
        }
    }

    /// Terminal foreground for this color, `None` for [`Color::Default`].
    fn terminal(self) -> Option<DynColors> {
        let color = match self {
            Color::Default => return None,
            Color::Black => DynColors::Ansi(AnsiColors::Black),
            Color::Red => DynColors::Ansi(AnsiColors::Red),
            Color::Green => DynColors::Ansi(AnsiColors::Green),
            Color::Blue => DynColors::Ansi(AnsiColors::Blue),
            Color::Magenta => DynColors::Ansi(AnsiColors::Magenta),
            Color::Cyan => DynColors::Ansi(AnsiColors::Cyan),
            Color::White => DynColors::Ansi(AnsiColors::White),
            Color::Yellow => DynColors::Ansi(AnsiColors::Yellow),
            Color::Grey | Color::Gray => DynColors::Ansi(AnsiColors::BrightBlack),
            Color::Gold => DynColors::Rgb(255, 200, 0),
            Color::Ruby => DynColors::Rgb(224, 17, 95),
            Color::Leaf => DynColors::Rgb(95, 175, 50),
            Color::Ocean => DynColors::Rgb(0, 105, 148),
            Color::Pink => DynColors::Rgb(255, 120, 190),
            Color::Sky => DynColors::Rgb(120, 200, 240),
            Color::Light => DynColors::Rgb(220, 220, 220),
        };
        Some(color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color `{0}`")]
pub struct ParseColorError(pub String);

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Wraps text in whatever decoration a color means for the output target.
///
/// Renderers only ever call [`Colorizer::colorize`], so swapping the
/// implementation (e.g. [`PlainColorizer`] when stdout is not a terminal)
/// changes nothing else about the output.
pub trait Colorizer {
    fn colorize(&self, text: &str, color: Color) -> String;
}

/// ANSI escape sequences via `owo-colors`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorizer;

impl Colorizer for AnsiColorizer {
    fn colorize(&self, text: &str, color: Color) -> String {
        match color.terminal() {
            Some(fg) => text.color(fg).to_string(),
            None => text.to_string(),
        }
    }
}

/// Ignores colors entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainColorizer;

impl Colorizer for PlainColorizer {
    fn colorize(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

impl<C: Colorizer + ?Sized> Colorizer for &C {
    fn colorize(&self, text: &str, color: Color) -> String {
        (**self).colorize(text, color)
    }
}
