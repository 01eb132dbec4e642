pub mod api;
pub mod config;
pub mod dates;
pub mod pagination;
pub mod patch;
pub mod validation;
