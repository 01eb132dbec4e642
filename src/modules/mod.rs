pub mod about;
pub mod contact;
pub mod gateway;
pub mod project;
