pub mod app_state_builder;
pub mod fixtures;
pub mod in_memory;
pub mod mocks;
pub mod spawn;
pub mod stubs;
