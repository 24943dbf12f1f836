use std::io;

use super::row::{clip, edge, write_row, Span};

pub(crate) const FILTER_BOX_HEIGHT: u16 = 3;

/// Boxed text field for the filter. Shows the placeholder while the query is
/// empty and a block cursor while focused.
pub(crate) fn render_filter_box_at(
    stdout: &mut io::Stdout,
    y: u16,
    width: usize,
    query: &str,
    placeholder: &str,
    focused: bool,
) -> io::Result<()> {
    let inner = width.saturating_sub(2);
    if inner < 2 {
        return write_row(stdout, y, width, &[Span::plain(query)]);
    }

    write_row(stdout, y, width, &[Span::frame(edge('┌', '┐', inner))])?;
    write_row(stdout, y + 1, width, &field_spans(query, placeholder, focused, inner))?;
    write_row(stdout, y + 2, width, &[Span::frame(edge('└', '┘', inner))])
}

fn field_spans(query: &str, placeholder: &str, focused: bool, inner: usize) -> Vec<Span> {
    let text_room = inner - usize::from(focused);
    let (shown, text) = if query.is_empty() {
        let shown = clip(placeholder, text_room);
        (shown.chars().count(), Span::muted(shown))
    } else {
        let shown = tail(query, text_room);
        (shown.chars().count(), Span::plain(shown))
    };

    let mut spans = vec![Span::frame("│"), text];
    if focused {
        spans.push(Span::inverse(" "));
    }
    spans.push(Span::plain(" ".repeat(text_room - shown)));
    spans.push(Span::frame("│"));
    spans
}

/// Last `max_len` chars, so the end of a long query stays in view.
fn tail(input: &str, max_len: usize) -> String {
    let count = input.chars().count();
    input.chars().skip(count.saturating_sub(max_len)).collect()
}
