use crate::server::repository::in_memory::InMemory;
use crate::server::service::Service;

/// Shared per-worker handle to the service; cloning is cheap since the
/// store behind it is reference-counted.
#[derive(Clone)]
pub(crate) struct AppState {
    service: Service<InMemory>,
}

impl AppState {
    pub fn new(service: Service<InMemory>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &Service<InMemory> {
        &self.service
    }
}
