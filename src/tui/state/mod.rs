pub mod app_state;
pub mod navigation;
pub mod reducer;

pub use app_state::{AppState, ModalState, StatusMessage};
pub use navigation::{ConfirmChoice, MenuMode, NavigationState};
pub use reducer::{reduce, Transition};
