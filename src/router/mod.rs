//! Section routing.
//!
//! State lives in an immutable [`ViewState`] snapshot; every mutation produces
//! the next snapshot. [`select_content`] turns a snapshot into the ordered list
//! of panels a front-end renders.

pub mod content;
pub mod state;

pub use content::{ContentDescriptor, Panel, PanelKind, select_content, select_content_by_name};
pub use state::{ViewAction, ViewState};
