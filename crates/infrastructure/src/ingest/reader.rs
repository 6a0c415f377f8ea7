use super::envelope_dto::parse_envelope;
use dnstap_flat_domain::{DnstapEnvelope, DomainError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Reads one dnstap envelope per line. Blank lines are skipped.
pub struct EnvelopeReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: AsyncBufRead + Unpin> EnvelopeReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns `Ok(None)` at end of input. A malformed line yields
    /// `InvalidEnvelope`; reading can continue with the next call.
    pub async fn next_envelope(&mut self) -> Result<Option<DnstapEnvelope>, DomainError> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;

            let Some(line) = line else {
                return Ok(None);
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            return parse_envelope(&line)
                .map(Some)
                .map_err(|reason| DomainError::InvalidEnvelope {
                    line: self.line_number,
                    reason,
                });
        }
    }
}
