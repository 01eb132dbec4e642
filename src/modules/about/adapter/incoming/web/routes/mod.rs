mod about_items;
mod create_about;
mod delete_about;
mod get_abouts;
mod get_single_about;
mod set_active_about;
mod update_about;

pub use about_items::*;
pub use create_about::*;
pub use delete_about::*;
pub use get_abouts::*;
pub use get_single_about::*;
pub use set_active_about::*;
pub use update_about::*;
