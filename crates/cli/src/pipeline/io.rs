use anyhow::Context;
use dnstap_flat_infrastructure::ingest::{EnvelopeReader, RecordWriter};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader, BufWriter};
use tracing::info;

pub type InputStream = EnvelopeReader<Box<dyn AsyncBufRead + Unpin + Send>>;
pub type OutputStream = RecordWriter<Box<dyn AsyncWrite + Unpin + Send>>;

pub async fn open_input(path: Option<&Path>) -> anyhow::Result<InputStream> {
    let source: Box<dyn AsyncBufRead + Unpin + Send> = match path {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            info!(path = %path.display(), "Reading envelopes from file");
            Box::new(BufReader::new(file))
        }
        None => {
            info!("Reading envelopes from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };
    Ok(EnvelopeReader::new(source))
}

pub async fn open_output(path: Option<&Path>) -> anyhow::Result<OutputStream> {
    let sink: Box<dyn AsyncWrite + Unpin + Send> = match path {
        Some(path) => {
            let file = File::create(path)
                .await
                .with_context(|| format!("Failed to create output {}", path.display()))?;
            info!(path = %path.display(), "Writing records to file");
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(tokio::io::stdout())),
    };
    Ok(RecordWriter::new(sink))
}
