use crate::model::Framing;
use crate::ui::constants::border;

/// Draws the speech bubble around already wrapped rows.
///
/// Every row is padded to the longest one, so the edges line up with the
/// borders. An empty slice still yields both borders.
pub fn render_bubble(lines: &[String]) -> String {
    let max_length = longest_line(lines);

    let mut o = String::with_capacity((max_length + 5) * (lines.len() + 2));
    push_border(&mut o, border::TOP, max_length);

    let total = lines.len();
    for (index, line) in lines.iter().enumerate() {
        let (left, right) = Framing::for_row(index, total).glyphs();
        let padding = max_length - line.chars().count();

        o.push(left);
        o.push(' ');
        o.push_str(line);
        o.extend(std::iter::repeat(' ').take(padding));
        o.push(' ');
        o.push(right);
        o.push('\n');
    }

    push_border(&mut o, border::BOTTOM, max_length);
    o
}

/// Width of every content row, edges included.
pub fn bubble_width(lines: &[String]) -> usize {
    longest_line(lines) + 4
}

fn longest_line(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

fn push_border(o: &mut String, ch: char, max_length: usize) {
    o.push(' ');
    o.extend(std::iter::repeat(ch).take(max_length + 2));
    o.push('\n');
}
