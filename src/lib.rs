pub mod event_stack;
pub mod prelude;
pub mod session;
pub mod text_event;
