//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`editor`]** — the editable source buffer and cursor movement
//! - **[`panes`]** — stateless render functions for each visible pane (source,
//!   tokens, result, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the initial
//! source text and call [`App::run`] to start the event loop. Analysis only
//! runs when requested (F5), mirroring an explicit "analyze" button.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod editor;
pub mod panes;
pub mod theme;

pub use app::App;
