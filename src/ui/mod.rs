use log::debug;

pub mod bubble;
pub mod constants;
pub mod cow;
pub mod text;

use text::TextWrapper;

/// Renders `message` in a speech bubble above the cow.
///
/// Rows are wrapped at `max_line_length` characters. The result has no
/// trailing newline; printing it is left to the caller.
pub fn render(message: &str, max_line_length: usize) -> String {
    let lines = TextWrapper::wrap(message, max_line_length);
    let mut output = bubble::render_bubble(&lines);
    cow::append_cow(&mut output);

    debug!(
        "rendered {} bubble row(s), {} columns wide",
        lines.len(),
        bubble::bubble_width(&lines)
    );

    output
}
