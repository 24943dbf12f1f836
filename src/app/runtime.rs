use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::app::input::handle_key_event;
use crate::app::AppState;
use crate::ui;

pub fn run(stdout: &mut io::Stdout, state: &mut AppState) -> io::Result<()> {
    let input_poll = Duration::from_millis(100);
    let mut needs_render = true;

    loop {
        if event::poll(input_poll)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, state) {
                        break;
                    }
                    needs_render = true;
                }
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        }

        if state.clear_expired_message() {
            needs_render = true;
        }

        if needs_render {
            let has_field = ui::render_labels(stdout, state)?;
            if let Some(filter) = state.filter.as_mut() {
                if has_field {
                    filter.attach_input();
                } else {
                    filter.detach_input();
                }
            }
            needs_render = false;
        }
    }

    Ok(())
}
