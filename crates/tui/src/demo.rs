//! Sample content and styling for the demo binary.
//!
//! The generated body is long enough to exercise every navigation key and
//! carries visible markers so the scroll position can be checked by eye.

use ratatui::style::Color;
use scaffold_protocol::HorizontalAlign;

use crate::{layout::Layout, style::BandStyle, viewport::display_width};

/// Header text of the demo.
pub const TITLE: &str = concat!("TUI Layout Scaffold Demo v", env!("CARGO_PKG_VERSION"));

/// Footer shown when neither help nor position info is toggled on.
pub const DEFAULT_FOOTER: &str = "Press 'h' for help | 'p' for position info | 'q' to quit";

/// Footer shown while help is toggled on.
pub const HELP_FOOTER: &str = "h: toggle help | p: show position | q: quit | ↑/↓, j/k: line | u/d: half page | page up/down | home/end, t/b: top/bottom";

/// Footer suffix shown while position info is toggled on.
pub const POSITION_FOOTER: &str = "Press 'p' to hide position info | 'q' to quit";

const SECTIONS: usize = 10;
const LINES_PER_SECTION: usize = 30;
const MARKER_EVERY: usize = 5;

const HELP: &str = "\
Navigation Controls:
↑/↓, j/k      : Scroll up/down one line
PageUp/PageDown: Scroll full page up/down
Home/End       : Go to top/bottom
u/d           : Scroll half page up/down
t/b           : Go to top/bottom
h             : Toggle help in footer
p             : Show position info
q             : Quit";

/// Header style of the demo: bold white on blue-violet, padded by one row
/// and one column.
#[must_use]
pub fn header_style() -> BandStyle {
    BandStyle::header()
        .bg(Color::Rgb(0x8A, 0x2B, 0xE2))
        .padding(1, 1)
}

/// Footer style of the demo: the default footer with one column of padding.
#[must_use]
pub fn footer_style() -> BandStyle {
    BandStyle::footer().padding(0, 1)
}

/// Builds the demo layout: a three-row header, the default footer text and
/// the generated body.
#[must_use]
pub fn layout() -> Layout {
    let mut layout = Layout::new();
    layout.set_header(TITLE);
    layout.set_header_style(header_style());
    layout.set_header_height(3);
    layout.set_footer(DEFAULT_FOOTER);
    layout.set_footer_style(footer_style());
    layout.set_content(content());
    layout
}

/// Generates the demo body: a help block, a top marker, numbered sections
/// with a marker line every few lines, and a bottom marker.
#[must_use]
pub fn content() -> String {
    let help_width = HELP.lines().map(display_width).max().unwrap_or(0);
    let help = BandStyle::default()
        .width(u16::try_from(help_width + 2).unwrap_or(u16::MAX))
        .align(HorizontalAlign::Left)
        .padding(1, 1);
    let section = BandStyle::default().width(50).padding(1, 0);

    let mut out = String::new();
    out.push_str(&help.render(HELP));
    out.push_str("\n\n");
    out.push_str(&section.render("TOP OF CONTENT"));
    out.push_str("\n\n");

    for n in 1..=SECTIONS {
        out.push_str(&section.render(&format!("Section {n} of {SECTIONS}")));
        out.push_str("\n\n");
        for line in 1..=LINES_PER_SECTION {
            if line % MARKER_EVERY == 0 {
                out.push_str(&format!("---- MARKER: Section {n}, Line {line} ----\n"));
            }
            out.push_str(&format!(
                "Section {n}, Line {line}: This is sample content for testing scrolling\n"
            ));
        }
        out.push('\n');
    }

    out.push_str(&section.render("BOTTOM OF CONTENT"));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::line_count;

    #[test]
    fn content_has_top_and_bottom_markers() {
        let content = content();
        let top = content.find("TOP OF CONTENT").unwrap();
        let bottom = content.find("BOTTOM OF CONTENT").unwrap();
        assert!(top < bottom);
        assert!(content.starts_with(' '));
    }

    #[test]
    fn content_has_every_section_and_marker() {
        let content = content();
        for n in 1..=SECTIONS {
            assert!(content.contains(&format!("Section {n} of {SECTIONS}")));
        }
        let markers = content.matches("---- MARKER:").count();
        assert_eq!(markers, SECTIONS * LINES_PER_SECTION / MARKER_EVERY);
        assert!(content.contains("---- MARKER: Section 10, Line 30 ----"));
    }

    #[test]
    fn content_is_taller_than_a_terminal() {
        assert!(line_count(&content()) > SECTIONS * LINES_PER_SECTION);
    }

    #[test]
    fn section_banners_are_fixed_width() {
        let content = content();
        let banner = content
            .lines()
            .find(|line| line.contains("Section 3 of 10"))
            .unwrap();
        assert_eq!(banner.len(), 50);
    }

    #[test]
    fn layout_uses_demo_bands() {
        let layout = layout();
        assert_eq!(layout.header(), TITLE);
        assert_eq!(layout.header_height(), 3);
        assert_eq!(layout.footer(), DEFAULT_FOOTER);
        assert_eq!(layout.content(), content());
        assert!(!layout.is_sized());
    }

    #[test]
    fn header_title_fills_middle_row() {
        let mut layout = layout();
        layout.resize(60, 20);
        let view = layout.view();
        let rows: Vec<&str> = view.split('\n').collect();
        assert_eq!(rows[0].trim(), "");
        assert!(rows[1].contains(TITLE));
        assert_eq!(rows[2].trim(), "");
    }
}
