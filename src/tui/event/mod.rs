pub mod action;
pub mod input;

pub use action::NavEvent;
pub use input::handle_key_event;
