//! JSON-RPC over HTTP

mod error;
mod router;
mod state;

pub use error::ServerError;
pub use router::build_router;
pub(crate) use state::ServerState;

use crate::application::handler::McpHandler;
use crate::infrastructure::api::ApiTransport;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve<T>(handler: Arc<McpHandler<T>>, addr: SocketAddr) -> Result<(), ServerError>
where
    T: ApiTransport + 'static,
{
    router::serve(handler, addr).await
}
