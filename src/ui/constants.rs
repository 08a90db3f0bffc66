// Border characters, repeated across the full bubble width
pub mod border {
    pub const TOP: char = '_';
    pub const BOTTOM: char = '-';
}

// Left/right edge pairs, chosen by row position
pub mod framing {
    pub const SINGLE: (char, char) = ('<', '>');
    pub const FIRST: (char, char) = ('/', '\\');
    pub const MIDDLE: (char, char) = ('|', '|');
    pub const LAST: (char, char) = ('\\', '/');
}

/// The cow, drawn under the bubble. No trailing newline.
pub const COW: &str = r"    \   ^__^
     \  (oo)\_______
        (__)\       )\/\
            ||----w |
            ||     ||";
