pub mod entities;
pub mod profile_items;
