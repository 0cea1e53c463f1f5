use crate::utils::error::{Result, SegmentError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Reads whitespace-separated numbers from a line-oriented input, re-prompting
/// on tokens that are not finite reals.
pub struct NumberReader<R> {
    input: R,
    pending: VecDeque<String>,
    max_attempts: Option<usize>,
    show_prompts: bool,
    diagnostic: &'static str,
}

impl<R: BufRead> NumberReader<R> {
    pub fn new(input: R, diagnostic: &'static str) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            max_attempts: None,
            show_prompts: true,
            diagnostic,
        }
    }

    /// Caps the number of rejected tokens per value. `None` retries forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_prompts(mut self, show_prompts: bool) -> Self {
        self.show_prompts = show_prompts;
        self
    }

    /// Prompts on `out` until a finite number is entered. Each rejected token
    /// is dropped and reported on `err`.
    pub fn read_number<W: Write, E: Write>(
        &mut self,
        prompt: &str,
        out: &mut W,
        err: &mut E,
    ) -> Result<f64> {
        let mut rejected = 0usize;
        loop {
            if self.show_prompts {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }

            let token = self.next_token()?.ok_or_else(|| SegmentError::InputClosed {
                prompt: prompt.trim_end().to_string(),
            })?;

            if let Some(value) = parse_number(&token) {
                tracing::debug!("Accepted {} for '{}'", value, prompt.trim_end());
                return Ok(value);
            }

            rejected += 1;
            tracing::debug!("Rejected token {:?} (attempt {})", token, rejected);
            writeln!(err, "{}", self.diagnostic)?;

            if let Some(limit) = self.max_attempts {
                if rejected >= limit {
                    tracing::warn!("Giving up after {} invalid entries", rejected);
                    return Err(SegmentError::AttemptsExhausted { attempts: rejected });
                }
            }
        }
    }

    /// Next whitespace-delimited token, reading more lines as needed.
    /// Returns `None` at end of input. Bytes that are not UTF-8 decode to
    /// replacement characters, so they end up as malformed tokens.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }
}

/// Parses a finite real. NaN and infinities are treated as malformed.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
