use dnstap_flat_domain::{DomainError, FlatRecord};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes flat records as JSON lines.
pub struct RecordWriter<W> {
    writer: W,
    buffer: Vec<u8>,
    written: u64,
}

impl<W: AsyncWrite + Unpin> RecordWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(512),
            written: 0,
        }
    }

    pub async fn write_record(&mut self, record: &FlatRecord) -> Result<(), DomainError> {
        self.buffer.clear();
        serde_json::to_writer(&mut self.buffer, record)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        self.buffer.push(b'\n');

        self.writer
            .write_all(&self.buffer)
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        self.written += 1;
        Ok(())
    }

    pub async fn flush(&mut self) -> Result<(), DomainError> {
        self.writer
            .flush()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub fn records_written(&self) -> u64 {
        self.written
    }
}
