pub mod project_query;
pub mod project_repository;

pub use project_query::{ProjectListFilter, ProjectQuery, ProjectQueryError};
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
