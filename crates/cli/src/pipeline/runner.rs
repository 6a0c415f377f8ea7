use dnstap_flat_application::use_cases::FlattenDnstapUseCase;
use dnstap_flat_domain::DomainError;
use dnstap_flat_infrastructure::ingest::{EnvelopeReader, RecordWriter};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records_written: u64,
    pub decode_failures: u64,
    pub invalid_envelopes: u64,
}

/// Flattens every envelope from `reader` into `writer`.
///
/// Envelopes that fail to parse or decode are logged and skipped, unless
/// `fail_fast` is set. I/O and serialization errors always stop the run.
pub async fn run<R, W>(
    flatten: &FlattenDnstapUseCase,
    mut reader: EnvelopeReader<R>,
    mut writer: RecordWriter<W>,
    options: RunOptions,
) -> Result<RunStats, DomainError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = RunStats::default();

    loop {
        let envelope = match reader.next_envelope().await {
            Ok(Some(envelope)) => envelope,
            Ok(None) => break,
            Err(e @ DomainError::InvalidEnvelope { .. }) => {
                stats.invalid_envelopes += 1;
                if options.fail_fast {
                    error!(error = %e, "Stopping at invalid envelope");
                    writer.flush().await?;
                    return Err(e);
                }
                warn!(error = %e, "Skipping invalid envelope");
                continue;
            }
            Err(e) => return Err(e),
        };

        match flatten.execute(&envelope) {
            Ok(record) => writer.write_record(&record).await?,
            Err(e) if e.is_decode_failure() => {
                stats.decode_failures += 1;
                if options.fail_fast {
                    error!(line = reader.line_number(), error = %e, "Stopping at decode failure");
                    writer.flush().await?;
                    return Err(e);
                }
                warn!(line = reader.line_number(), error = %e, "Skipping envelope");
            }
            Err(e) => return Err(e),
        }
    }

    writer.flush().await?;
    stats.records_written = writer.records_written();
    Ok(stats)
}
