//! Markdown editor core for Folio.
//!
//! Toolbar commands are [`Operation`]s applied to an immutable
//! [`TextBuffer`] by the pure [`apply`] function. An [`EditorSession`] owns
//! the current buffer, re-renders the preview after every change and reports
//! it through an injected callback.
//!
//! # Example
//!
//! ```
//! use folio_editor::{EditorSession, Operation, TextBuffer};
//! use folio_renderer::PreviewRenderer;
//!
//! let buffer = TextBuffer::new("a\nb").with_selection(0..3);
//! let mut session = EditorSession::new(buffer, PreviewRenderer::new());
//! session.apply(&Operation::from_name("ul", None).unwrap());
//! assert_eq!(session.buffer().text(), "- a\n- b");
//! assert_eq!(session.preview().html, "<ul><li>a</li><li>b</li></ul>");
//! ```

pub mod confirm;
mod error;
mod operation;
mod selection;
mod session;
mod transform;

pub use error::{EditorError, TransformError};
pub use operation::{HeadingLevel, LINK_PLACEHOLDER, ListKind, Operation, WrapSelection};
pub use selection::{SelectionRange, TextBuffer};
pub use session::{ChangeCallback, EditorSession, ImageRequest};
pub use transform::{HORIZONTAL_RULE, apply};
