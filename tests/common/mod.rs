use cowsay_rs::ui::constants::COW;

/// Splits a render into its bubble lines, dropping the cow underneath.
///
/// Only meaningful for messages without embedded newlines.
pub fn bubble_lines(output: &str) -> Vec<&str> {
    let bubble = output
        .strip_suffix(COW)
        .expect("Render should end with the cow");
    bubble.lines().collect()
}

/// Content rows of a bubble, without the two borders.
pub fn content_rows<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines[1..lines.len() - 1].to_vec()
}

/// Strips the framing and padding from a content row.
pub fn row_text(row: &str) -> &str {
    let mut chars = row.chars();
    chars.next();
    chars.next_back();
    chars.as_str().trim()
}

/// Width of a line in characters.
pub fn width(line: &str) -> usize {
    line.chars().count()
}

/// Messages that exercise short, long and overlong words.
#[allow(dead_code)]
pub fn sample_messages() -> Vec<&'static str> {
    vec![
        "Hello, World!",
        "This is a very long message that exceeds the maximum line length.",
        "The quick brown fox jumps over the lazy dog",
        "Supercalifragilisticexpialidocious words stay whole",
        "a b c d e f g h i j k l m n o p",
        "moo",
    ]
}
