//! Newline-delimited JSON-RPC over stdin/stdout

use crate::application::handler::McpHandler;
use crate::infrastructure::api::ApiTransport;
use crate::infrastructure::rpc::RpcResponse;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serves MCP on the process stdio until stdin is closed.
pub async fn run<T>(handler: Arc<McpHandler<T>>) -> Result<(), StdioError>
where
    T: ApiTransport + 'static,
{
    info!("Serving MCP over stdio");
    serve(handler, io::stdin(), io::stdout()).await
}

/// Each line is handled on its own task; responses go through a single writer in
/// completion order.
pub async fn serve<T, R, W>(handler: Arc<McpHandler<T>>, input: R, output: W) -> Result<(), StdioError>
where
    T: ApiTransport + 'static,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<RpcResponse>();
    let writer = tokio::spawn(write_responses(rx, output));

    let mut lines = BufReader::new(input).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let handler = Arc::clone(&handler);
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle_message(&line).await {
                // Fails only after the writer has failed, which `serve` reports.
                let _ = tx.send(response);
            }
        });
    }
    debug!("stdin closed; waiting for in-flight requests");

    drop(tx);
    writer.await.map_err(std::io::Error::other)?
}

async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<RpcResponse>,
    mut output: W,
) -> Result<(), StdioError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_string(&response)?;
        line.push('\n');
        output.write_all(line.as_bytes()).await?;
        output.flush().await?;
    }
    Ok(())
}
