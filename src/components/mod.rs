//! Style trees for individual UI components.
//!
//! Each builder takes the scheme explicitly and returns plain records; no
//! component reads a process-wide "current theme".

mod titlebar;

pub use titlebar::{titlebar, user_menu_button, TitlebarStyle};
