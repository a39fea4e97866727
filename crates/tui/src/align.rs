//! Vertical alignment of body content.
//!
//! Alignment is a pure function of the raw content, the viewport height and
//! the mode. It is always recomputed from the raw content; padding an
//! already padded buffer would compound the padding on every resize.

use scaffold_protocol::VerticalAlign;

/// Number of lines in `content`: one more than its line breaks.
///
/// # Examples
///
/// ```
/// use scaffold_tui::align::line_count;
///
/// assert_eq!(line_count(""), 1);
/// assert_eq!(line_count("a\nb"), 2);
/// assert_eq!(line_count("a\nb\n"), 3);
/// ```
#[must_use]
pub fn line_count(content: &str) -> usize {
    content.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Aligns `content` inside a viewport of `height` rows.
///
/// Content that fills or overflows the viewport is returned unchanged.
/// Otherwise blank lines are prepended according to `mode`; nothing is
/// appended, since the viewport shows blank rows past the end of content.
///
/// # Examples
///
/// ```
/// use scaffold_protocol::VerticalAlign;
/// use scaffold_tui::align::align_content;
///
/// assert_eq!(align_content("a\nb", 6, VerticalAlign::Center), "\n\na\nb");
/// assert_eq!(align_content("a\nb", 6, VerticalAlign::Bottom), "\n\n\n\na\nb");
/// assert_eq!(align_content("a\nb", 1, VerticalAlign::Bottom), "a\nb");
/// ```
#[must_use]
pub fn align_content(content: &str, height: u16, mode: VerticalAlign) -> String {
    let lines = line_count(content);
    let height = usize::from(height);
    if lines >= height {
        return content.to_owned();
    }

    let leading = mode.leading_padding(height - lines);
    let mut aligned = String::with_capacity(leading + content.len());
    aligned.extend(std::iter::repeat_n('\n', leading));
    aligned.push_str(content);
    aligned
}
