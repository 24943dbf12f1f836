use std::io::{self, Write};

use crossterm::terminal;

use crate::app::{AppState, InputMode};

use super::row::{blank_rows, pad, write_row, Span};
use super::search::{render_filter_box_at, FILTER_BOX_HEIGHT};

/// Draw the whole screen. Returns true when a filter field was drawn, which
/// the runtime uses to attach or detach the controller's input.
pub fn render_labels(stdout: &mut io::Stdout, state: &AppState) -> io::Result<bool> {
    let (width, height) = terminal::size().unwrap_or((80, 24));
    let width = width as usize;
    let height = height as usize;

    let tag_name = state.active_tag().unwrap_or("-");
    let mut row = 0u16;
    write_row(
        stdout,
        row,
        width,
        &[Span::inverse(" LABELS "), Span::plain(format!(" {tag_name}"))],
    )?;
    blank_rows(stdout, 1..2, width)?;
    row += 2;

    let filter = state.filter.as_ref().filter(|f| {
        state
            .registry
            .get(f.to_name())
            .is_some_and(|t| t.kind().supports_filter())
    });
    if let Some(filter) = filter {
        render_filter_box_at(
            stdout,
            row,
            width,
            filter.query(),
            &filter.config().placeholder,
            filter.is_focused(),
        )?;
        row += FILTER_BOX_HEIGHT;
    }

    let candidates = state.active_candidates();
    let visible: Vec<_> = candidates.iter().filter(|ch| ch.visible).collect();
    let header = format!("{} of {} shown", visible.len(), candidates.len());
    write_row(stdout, row, width, &[Span::plain(header)])?;
    row += 1;

    let list_start = row as usize;
    let footer_lines = 2usize;
    let max_rows = height.saturating_sub(list_start + footer_lines);

    if max_rows > 0 {
        if visible.is_empty() {
            write_row(stdout, list_start as u16, width, &[Span::plain("No matching labels.")])?;
            blank_rows(stdout, list_start + 1..list_start + max_rows, width)?;
        } else {
            let shown = visible.len().min(max_rows);
            for (idx, candidate) in visible.iter().take(shown).enumerate() {
                let y = (list_start + idx) as u16;
                let marker = if candidate.selected { "[x]" } else { "[ ]" };
                let line = format!(" {marker} {}", candidate.label);
                let span = if idx == 0 && state.filter.is_some() {
                    Span::inverse(pad(&line, width))
                } else {
                    Span::plain(line)
                };
                write_row(stdout, y, width, &[span])?;
            }
            blank_rows(stdout, list_start + shown..list_start + max_rows, width)?;
        }
    }

    if height >= footer_lines {
        let message_line = height.saturating_sub(footer_lines) as u16;
        let message = state.message.as_deref().unwrap_or("");
        write_row(stdout, message_line, width, &[Span::plain(message)])?;
        write_row(stdout, message_line + 1, width, &help_spans(state))?;
    }

    stdout.flush()?;
    Ok(filter.is_some())
}

fn help_spans(state: &AppState) -> Vec<Span> {
    let mut spans = Vec::new();
    match state.input_mode() {
        InputMode::Filter => {
            spans.push(Span::inverse(" FILTER "));
            spans.push(Span::key(" Enter"));
            spans.push(Span::plain(" select first"));
            spans.push(Span::key("  Ctrl+U"));
            spans.push(Span::plain(" clear"));
            spans.push(Span::key("  Esc"));
            spans.push(Span::plain(" leave"));
        }
        InputMode::Normal => {
            if state.filter.is_some() {
                let focus_key = state
                    .filter
                    .as_ref()
                    .and_then(|f| f.config().hotkey.clone())
                    .map_or_else(|| "/".to_string(), |key| format!("/ or {key}"));
                spans.push(Span::key(format!(" {focus_key}")));
                spans.push(Span::plain(" filter"));
                spans.push(Span::key("  x"));
                spans.push(Span::plain(" clear"));
                spans.push(Span::key("  Enter"));
                spans.push(Span::plain(" select first"));
            }
            spans.push(Span::key("  q"));
            spans.push(Span::plain(" quit"));
        }
    }
    spans
}
