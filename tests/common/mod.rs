#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use snaplink::api::routes::api_routes;
use snaplink::application::services::{CodeAllocator, UrlService};
use snaplink::domain::repositories::UrlRepository;
use snaplink::infrastructure::persistence::InMemoryUrlRepository;
use snaplink::state::AppState;
use snaplink::utils::code_generator::DEFAULT_CODE_LENGTH;

pub const BASE_URL: &str = "http://sn.test";

pub fn create_test_state(repository: Arc<dyn UrlRepository>) -> AppState {
    let allocator = CodeAllocator::new(repository.clone(), DEFAULT_CODE_LENGTH, 10);
    let service = UrlService::new(repository, allocator, BASE_URL);
    AppState::new(Arc::new(service))
}

pub fn memory_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    (create_test_state(repository.clone()), repository)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(api_routes().with_state(state)).unwrap()
}

pub fn memory_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (state, repository) = memory_state();
    (make_server(state), repository)
}
