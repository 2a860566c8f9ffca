//! Common types re-exported for convenience.

pub use crate::event_stack::EventStack;
pub use crate::session::{Session, StackCommand};
pub use crate::text_event::{error::TextEventError, TextEvent};
