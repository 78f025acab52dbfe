/// A terminal color. Styles use `None` for the terminal default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Black.
    Black,
    /// Dark grey.
    DarkGrey,
    /// Red.
    Red,
    /// Dark red.
    DarkRed,
    /// Green.
    Green,
    /// Dark green.
    DarkGreen,
    /// Yellow.
    Yellow,
    /// Dark yellow.
    DarkYellow,
    /// Blue.
    Blue,
    /// Dark blue.
    DarkBlue,
    /// Magenta.
    Magenta,
    /// Dark magenta.
    DarkMagenta,
    /// Cyan.
    Cyan,
    /// Dark cyan.
    DarkCyan,
    /// White.
    White,
    /// Grey.
    Grey,
    /// RGB color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },

    /// An ANSI color. See [256 colors - cheat
    /// sheet](https://jonasjacek.github.io/colors/) for more info.
    AnsiValue(u8),
}


/// Color names in the order of the 16 basic ANSI colors.
const NAMES: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("red", Color::DarkRed),
    ("green", Color::DarkGreen),
    ("yellow", Color::DarkYellow),
    ("blue", Color::DarkBlue),
    ("magenta", Color::DarkMagenta),
    ("cyan", Color::DarkCyan),
    ("white", Color::Grey),
    ("bright-black", Color::DarkGrey),
    ("bright-red", Color::Red),
    ("bright-green", Color::Green),
    ("bright-yellow", Color::Yellow),
    ("bright-blue", Color::Blue),
    ("bright-magenta", Color::Magenta),
    ("bright-cyan", Color::Cyan),
    ("bright-white", Color::White),
];

impl Color {
    /// Parse a color name: one of the 16 ANSI names (`red`, `bright-red`,
    /// ...), `colorN` for a 256-color palette entry, or `#rrggbb`.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some((_, c)) = NAMES.iter().find(|(n, _)| *n == name) {
            return Some(*c);
        }
        if let Some(n) = name.strip_prefix("color") {
            return n.parse().ok().map(Self::AnsiValue);
        }
        let hex = name.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Is this one of the two reds?
    pub fn is_red(&self) -> bool {
        matches!(self, Self::Red | Self::DarkRed)
    }

    /// Is this one of the two greens?
    pub fn is_green(&self) -> bool {
        matches!(self, Self::Green | Self::DarkGreen)
    }
}
