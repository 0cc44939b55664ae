//! Presentation layer for exports
//!
//! - [`modal`] - Export dialog state, events and HTML rendering
//! - [`html`] - Escaping and markup fragments
//! - [`clipboard`] - System clipboard with a file fallback
//! - [`labels`] - User-facing strings

pub mod clipboard;
pub mod html;
pub mod labels;
pub mod modal;

pub use clipboard::{Clipboard, CommandClipboard, CopyService, FileClipboard};
pub use html::{escape_html, row_action_link, truncate_url};
pub use labels::Labels;
pub use modal::{CopyRequest, CopyTarget, ExportModal, Key, ModalEvent};
