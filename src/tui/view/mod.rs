mod action_menu;
mod attempts_popup;
mod confirm_popup;
mod error_popup;
mod help_popup;
mod layout;
mod status_bar;
mod style;
mod task_detail;
mod task_list;

pub use layout::render;
