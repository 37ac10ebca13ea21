mod auth_switch;
pub use auth_switch::*;

mod city_explorer;
pub use city_explorer::*;

mod college_card;
pub use college_card::*;

mod featured;
pub use featured::*;

mod hero;
pub use hero::*;

mod navbar;
pub use navbar::*;

mod provider;
pub use provider::*;

mod testimonials;
pub use testimonials::*;

pub mod toasts;
pub use toasts::{ToastNotifier, ToastViewer};
