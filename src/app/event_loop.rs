use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::editor::EditorBuffer;
use crate::error::DocError;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure. A file that cannot be opened at startup
    /// is reported in the UI instead.
    pub fn run(&mut self) -> Result<()> {
        // Scan fonts BEFORE initializing terminal so a slow scan shows no blank screen
        let families = if self.scan_system_fonts {
            crate::fonts::system_families()
        } else {
            Vec::new()
        };
        let font_families = crate::fonts::with_core_families(families);

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: docman requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(EditorBuffer::empty(), (size.width, size.height))
            .with_font_families(font_families);
        if let Some(path) = self.file_path.as_deref() {
            Self::load_initial_file(&mut model, path);
        }

        let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to enable mouse capture")
            .and_then(|()| Self::event_loop(&mut terminal, &mut model));

        // Restore terminal
        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    /// Open the file named on the command line.
    ///
    /// A missing file still becomes the save target, so `docman notes.txt`
    /// can start a new document.
    pub(super) fn load_initial_file(model: &mut Model, path: &Path) {
        if let Err(DocError::Read { source, .. }) = Self::open_file(model, path)
            && source.kind() == std::io::ErrorKind::NotFound
        {
            model.file_path = Some(path.to_path_buf());
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render {
                0
            } else if model.active_toast().is_some() {
                100
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::apply_message(model, msg);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while !model.should_quit && event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::apply_message(model, msg);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    tracing::trace!(drained, "coalesced events");
                }
            }

            if model.should_quit {
                break;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }
        }
        Ok(())
    }

    pub(super) fn apply_message(model: &mut Model, msg: Message) {
        tracing::trace!(?msg, "message");
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}
