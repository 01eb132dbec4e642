mod crud_resource;
mod envelope;
mod error;
mod http_client;
mod resource;

pub use crud_resource::CrudResource;
pub use envelope::{decode, decode_optional, unwrap_envelope};
pub use error::ClientError;
pub use http_client::HttpClient;
pub use resource::{ListQuery, Resource};
