use crate::application::handler::McpHandler;
use crate::infrastructure::api::ApiTransport;
use std::sync::Arc;

pub(crate) struct ServerState<T> {
    handler: Arc<McpHandler<T>>,
}

impl<T: ApiTransport> ServerState<T> {
    pub(crate) fn new(handler: Arc<McpHandler<T>>) -> Self {
        Self { handler }
    }

    pub(crate) fn handler(&self) -> Arc<McpHandler<T>> {
        Arc::clone(&self.handler)
    }
}
