use crate::model::LineSet;

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Greedily packs space-separated words into rows of at most `max_width`
    /// characters. Words are never split, so an overlong word gets a row to
    /// itself. Only ' ' separates words: a newline stays inside its word.
    pub fn wrap(text: &str, max_width: usize) -> LineSet {
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in text.split(' ').filter(|word| !word.is_empty()) {
            let word_width = word.chars().count();

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_line.push_str(word);
                current_width = word_width;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += 1;
                }
                current_line.push_str(word);
                current_width += word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        lines
    }
}
