mod route_adapter;
pub mod routes;

pub use route_adapter::ApiRouteAdapter;
