//! Stdio transport: one JSON message per line on stdin, one reply per line
//! on stdout. Logging goes to stderr.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::ServerResult;

/// Stdio transport driving a [`ProtocolHandler`].
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &ProtocolHandler {
        &self.handler
    }

    /// Serve stdin/stdout until EOF or `shutdown`.
    pub async fn run(&self) -> ServerResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Serve any line reader and writer until EOF or `shutdown`.
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> ServerResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        tracing::info!("Stdio transport started");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(reply) = self.handler.handle_line(line).await {
                let mut text = reply.to_string();
                text.push('\n');
                writer.write_all(text.as_bytes()).await?;
                writer.flush().await?;
            }

            if self.handler.is_shutdown_requested() {
                break;
            }
        }

        tracing::info!("Stdio transport stopped");
        Ok(())
    }
}
