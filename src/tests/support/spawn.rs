use std::net::TcpListener;

use actix_web::{App, HttpServer};

use crate::modules::gateway::client::HttpClient;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::tests::support::app_state_builder::TestAppStateBuilder;
use crate::tests::support::in_memory::{
    InMemoryAboutStore, InMemoryContactStore, InMemoryProjectStore,
};

/// The REST API on an ephemeral local port, backed by in-memory stores.
///
/// The server lives on the test's runtime and stops with it.
pub struct TestBackend {
    pub base_url: String,
    pub abouts: InMemoryAboutStore,
    pub contacts: InMemoryContactStore,
    pub projects: InMemoryProjectStore,
}

impl TestBackend {
    pub fn spawn() -> Self {
        let abouts = InMemoryAboutStore::default();
        let contacts = InMemoryContactStore::default();
        let projects = InMemoryProjectStore::default();

        let state = TestAppStateBuilder::default()
            .with_about_store(abouts.clone())
            .with_contact_store(contacts.clone())
            .with_project_store(projects.clone())
            .build();

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
        let port = listener
            .local_addr()
            .expect("Listener has no local address")
            .port();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(custom_json_config())
                .app_data(custom_path_config())
                .app_data(custom_query_config())
                .configure(crate::init_routes)
        })
        .workers(1)
        .listen(listener)
        .expect("Failed to listen on ephemeral port")
        .run();

        tokio::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            abouts,
            contacts,
            projects,
        }
    }

    pub fn http(&self) -> HttpClient {
        HttpClient::new(self.base_url.clone())
    }
}
