mod about_query;
mod about_repository;

pub use about_query::{AboutListFilter, AboutQuery, AboutQueryError};
pub use about_repository::{AboutRepository, AboutRepositoryError};
