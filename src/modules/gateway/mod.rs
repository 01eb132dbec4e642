//! Admin gateway: forwards `/api/{resource}` calls to the REST API over HTTP.

pub mod adapter;
pub mod client;
pub mod services;
