use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Writes a serialized response to the client, handling partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    /// Combines the header block and body into one outgoing buffer.
    pub fn new(header: Vec<u8>, body: Vec<u8>) -> Self {
        let mut buffer = header;
        buffer.extend_from_slice(&body);

        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}
