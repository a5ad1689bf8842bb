use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::files::DocumentRoot;
use crate::http::handler::handle_request;
use crate::http::writer::ResponseWriter;

/// How much of a request is read from the socket. Anything past this is
/// never looked at; the connection serves one response and closes.
const READ_BUFFER_SIZE: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    root: DocumentRoot,
}

impl Connection {
    pub fn new(stream: TcpStream, root: DocumentRoot) -> Self {
        Self { stream, root }
    }

    /// Serves exactly one request: read once, respond, close.
    ///
    /// A read of zero bytes (client went away immediately) is handed to the
    /// handler as an empty buffer and answered like any unparsable request.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut buffer = BytesMut::with_capacity(READ_BUFFER_SIZE);
        self.stream.read_buf(&mut buffer).await?;

        tracing::debug!("Received data:\n{}", String::from_utf8_lossy(&buffer));

        let (header, body) = handle_request(&buffer, &self.root);

        tracing::debug!("Responding with:\n{}", String::from_utf8_lossy(&header));

        let mut writer = ResponseWriter::new(header, body);
        writer.write_to_stream(&mut self.stream).await?;
        self.stream.shutdown().await?;

        Ok(())
    }
}
