use crate::ui::constants::framing;

/// Wrapped message rows, top to bottom.
pub type LineSet = Vec<String>;

/// Maximum number of characters per bubble row.
///
/// Soft limit: a word longer than the width still gets a row of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WrapWidth(usize);

impl WrapWidth {
    pub const DEFAULT: WrapWidth = WrapWidth(40);

    pub const fn new(width: usize) -> Self {
        Self(width)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for WrapWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for WrapWidth {
    fn from(width: usize) -> Self {
        Self(width)
    }
}

// Non-positive widths clamp to zero, which puts every word on its own row.
impl From<i64> for WrapWidth {
    fn from(width: i64) -> Self {
        if width <= 0 {
            Self(0)
        } else {
            Self(usize::try_from(width).unwrap_or(usize::MAX))
        }
    }
}

/// Position of a row inside the bubble, which decides its edge glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    Single,
    First,
    Middle,
    Last,
}

impl Framing {
    pub const fn for_row(index: usize, total: usize) -> Self {
        if total == 1 {
            Framing::Single
        } else if index == 0 {
            Framing::First
        } else if index + 1 == total {
            Framing::Last
        } else {
            Framing::Middle
        }
    }

    /// Left and right edge characters for this row position.
    pub const fn glyphs(self) -> (char, char) {
        match self {
            Framing::Single => framing::SINGLE,
            Framing::First => framing::FIRST,
            Framing::Middle => framing::MIDDLE,
            Framing::Last => framing::LAST,
        }
    }
}
