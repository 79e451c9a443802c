//! TUI pane rendering modules
//!
//! Each module exports one stateless `render_*` function; scroll offsets are
//! owned by [`App`](crate::ui::App) and passed in by reference.
//!
//! - [`source`]: Editable source with lexer-driven highlighting and error line
//! - [`tokens`]: Token listing from the last analysis
//! - [`result`]: Verdict and warnings
//! - [`status`]: Status bar with keybindings

pub mod result;
pub mod source;
pub mod status;
pub mod tokens;

// Re-export render functions for convenience
pub use result::render_result_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
