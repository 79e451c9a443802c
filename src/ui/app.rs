//! Main TUI application state and logic

use crate::analysis::{analyze_with, Analysis, AnalyzerConfig};
use crate::ui::editor::EditorBuffer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

/// Rows moved by PageUp/PageDown in the list panes.
const PAGE_SIZE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Tokens,
    Result,
}

impl FocusedPane {
    /// Move focus to the next pane (editor -> tokens -> result)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Result,
            FocusedPane::Result => FocusedPane::Editor,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Result,
            FocusedPane::Tokens => FocusedPane::Editor,
            FocusedPane::Result => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// Source text being edited
    pub editor: EditorBuffer,

    /// Settings passed to every analysis
    pub config: AnalyzerConfig,

    /// Result of the last analysis, if any has run
    pub analysis: Option<Analysis>,

    /// Whether the buffer changed since `analysis` was produced
    pub is_stale: bool,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub editor_scroll: usize,
    pub tokens_scroll: usize,
    pub result_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app editing `source`
    pub fn new(source: &str, config: AnalyzerConfig) -> Self {
        App {
            editor: EditorBuffer::from_text(source),
            config,
            analysis: None,
            is_stale: false,
            focused_pane: FocusedPane::Editor,
            editor_scroll: 0,
            tokens_scroll: 0,
            result_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Analyze the current buffer and reset the list panes.
    pub fn analyze(&mut self) {
        let analysis = analyze_with(&self.editor.text(), &self.config);
        debug!(tokens = analysis.tokens.len(), valid = analysis.is_valid(), "re-analyzed buffer");

        self.status_message = match analysis.error() {
            None => format!("Analyzed {} token(s): valid", analysis.tokens.len()),
            Some(e) => format!("Syntax error at {}", e.location()),
        };
        self.analysis = Some(analysis);
        self.is_stale = false;
        self.tokens_scroll = 0;
        self.result_scroll = 0;
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Right column: Tokens (top) | Result (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let error_location = self
            .analysis
            .as_ref()
            .and_then(Analysis::error)
            .map(|e| e.location());

        let cursor = super::panes::render_source_pane(
            frame,
            columns[0],
            &self.editor,
            error_location,
            self.focused_pane == FocusedPane::Editor,
            &mut self.editor_scroll,
        );
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            self.analysis.as_ref(),
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_result_pane(
            frame,
            right_rows[1],
            self.analysis.as_ref(),
            self.is_stale,
            self.focused_pane == FocusedPane::Result,
            &mut self.result_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.analysis.as_ref().map(Analysis::is_valid),
            self.is_stale,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Char('Q') if ctrl => self.should_quit = true,
            KeyCode::F(5) => self.analyze(),
            KeyCode::Char('r') | KeyCode::Char('R') if ctrl => self.analyze(),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.prev(),
            _ => match self.focused_pane {
                FocusedPane::Editor => self.handle_editor_key(key, ctrl),
                FocusedPane::Tokens => Self::scroll(&mut self.tokens_scroll, key.code),
                FocusedPane::Result => Self::scroll(&mut self.result_scroll, key.code),
            },
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent, ctrl: bool) {
        let edited = match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.editor.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.editor.insert_newline();
                true
            }
            KeyCode::Backspace => {
                self.editor.backspace();
                true
            }
            KeyCode::Delete => {
                self.editor.delete();
                true
            }
            KeyCode::Left => {
                self.editor.move_left();
                false
            }
            KeyCode::Right => {
                self.editor.move_right();
                false
            }
            KeyCode::Up => {
                self.editor.move_up();
                false
            }
            KeyCode::Down => {
                self.editor.move_down();
                false
            }
            KeyCode::Home => {
                self.editor.move_home();
                false
            }
            KeyCode::End => {
                self.editor.move_end();
                false
            }
            _ => false,
        };

        if edited && self.analysis.is_some() {
            self.is_stale = true;
        }
    }

    /// Scroll a list pane. Rendering clamps the offset to the content.
    fn scroll(offset: &mut usize, code: KeyCode) {
        match code {
            KeyCode::Up => *offset = offset.saturating_sub(1),
            KeyCode::Down => *offset = offset.saturating_add(1),
            KeyCode::PageUp => *offset = offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => *offset = offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => *offset = 0,
            _ => {}
        }
    }
}
