pub mod abouts;
