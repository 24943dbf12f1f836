//! Full-width row writer for the label screen.
//!
//! Every screen line is a sequence of styled spans. `write_row` clips the
//! spans to the terminal width and pads the rest, so a row always overwrites
//! whatever was drawn there before.

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tone {
    Plain,
    /// Box-drawing characters
    Frame,
    /// Key names in the help line
    Key,
    /// Placeholder text
    Muted,
    /// Enter target and mode badge
    Inverse,
}

pub(crate) struct Span {
    tone: Tone,
    text: String,
}

impl Span {
    pub(crate) fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Plain, text)
    }

    pub(crate) fn frame(text: impl Into<String>) -> Self {
        Self::new(Tone::Frame, text)
    }

    pub(crate) fn key(text: impl Into<String>) -> Self {
        Self::new(Tone::Key, text)
    }

    pub(crate) fn muted(text: impl Into<String>) -> Self {
        Self::new(Tone::Muted, text)
    }

    pub(crate) fn inverse(text: impl Into<String>) -> Self {
        Self::new(Tone::Inverse, text)
    }
}

pub(crate) fn write_row(
    stdout: &mut io::Stdout,
    y: u16,
    width: usize,
    spans: &[Span],
) -> io::Result<()> {
    queue!(stdout, MoveTo(0, y))?;
    let mut room = width;
    for span in spans {
        if room == 0 {
            break;
        }
        let text = clip(&span.text, room);
        room -= text.chars().count();
        match span.tone {
            Tone::Plain => queue!(stdout, Print(text))?,
            Tone::Frame => queue!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor
            )?,
            Tone::Key => queue!(stdout, SetForegroundColor(Color::Cyan), Print(text), ResetColor)?,
            Tone::Muted => queue!(
                stdout,
                SetAttribute(Attribute::Dim),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?,
            Tone::Inverse => queue!(
                stdout,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?,
        }
    }
    if room > 0 {
        queue!(stdout, Print(" ".repeat(room)))?;
    }
    Ok(())
}

pub(crate) fn blank_rows(
    stdout: &mut io::Stdout,
    rows: std::ops::Range<usize>,
    width: usize,
) -> io::Result<()> {
    for y in rows {
        write_row(stdout, y as u16, width, &[])?;
    }
    Ok(())
}

/// Horizontal box edge, e.g. `edge('┌', '┐', 3)` is `┌───┐`.
pub(crate) fn edge(left: char, right: char, inner: usize) -> String {
    let mut line = String::with_capacity((inner + 2) * 3);
    line.push(left);
    line.extend(std::iter::repeat('─').take(inner));
    line.push(right);
    line
}

/// Clip to `max` chars, ending in `…` when something was cut.
pub(crate) fn clip(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some(_) if max == 0 => String::new(),
        Some(_) => {
            let mut clipped: String = text.chars().take(max - 1).collect();
            clipped.push('…');
            clipped
        }
    }
}

/// Clip and right-pad to exactly `width` chars.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let clipped = clip(text, width);
    let len = clipped.chars().count();
    format!("{clipped}{}", " ".repeat(width - len))
}
