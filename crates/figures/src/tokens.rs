//! Whitespace-separated token input.
//!
//! Any iterator of string-like items is a [`TokenSource`], so tests can feed
//! `"0 0 1 0".split_whitespace()` directly. [`ReaderTokens`] pulls lines from
//! a reader on demand, so a command and its coordinates may span lines.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::error::TokenFault;

/// Sequential token stream.
pub trait TokenSource {
    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> Option<String>;

    /// Next token parsed as a finite real number.
    ///
    /// `nan`, `inf` and out-of-range literals are malformed.
    fn next_f64(&mut self) -> Result<f64, TokenFault> {
        let tok = self.next_token().ok_or(TokenFault::Exhausted)?;
        match tok.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(x),
            _ => Err(TokenFault::Malformed(tok)),
        }
    }

    /// I/O error that ended the stream early, if any. Cleared on return.
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<I, S> TokenSource for I
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn next_token(&mut self) -> Option<String> {
        self.next().map(Into::into)
    }
}

/// Lazily tokenizes a buffered reader line by line.
///
/// Invalid UTF-8 is decoded lossily, so a bad byte becomes a bad token
/// rather than ending the input. A read error ends the stream and is kept
/// for [`TokenSource::take_error`].
pub struct ReaderTokens<R> {
    reader: R,
    pending: VecDeque<String>,
    done: bool,
    error: Option<io::Error>,
}

impl<R: BufRead> ReaderTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            done: false,
            error: None,
        }
    }

    fn refill(&mut self) {
        let mut line = Vec::new();
        while self.pending.is_empty() && !self.done {
            line.clear();
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => self.done = true,
                Ok(_) => self.pending.extend(
                    String::from_utf8_lossy(&line)
                        .split_whitespace()
                        .map(str::to_owned),
                ),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    self.error = Some(e);
                }
            }
        }
    }
}

impl<R: BufRead> TokenSource for ReaderTokens<R> {
    fn next_token(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn iterator_source_parses_reals() {
        let mut src = "1.5 -2 1e3".split_whitespace();
        assert_eq!(src.next_f64(), Ok(1.5));
        assert_eq!(src.next_f64(), Ok(-2.0));
        assert_eq!(src.next_f64(), Ok(1000.0));
        assert_eq!(src.next_f64(), Err(TokenFault::Exhausted));
    }

    #[test]
    fn malformed_token_is_reported_verbatim() {
        let mut src = "x1".split_whitespace();
        assert_eq!(src.next_f64(), Err(TokenFault::Malformed("x1".into())));
    }

    #[test]
    fn non_finite_reals_are_malformed() {
        for word in ["nan", "NaN", "inf", "-inf", "infinity", "1e400"] {
            let mut src = std::iter::once(word);
            assert_eq!(
                src.next_f64(),
                Err(TokenFault::Malformed(word.into())),
                "{word}"
            );
        }
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_stream() {
        let input: &[u8] = b"AREA\n\xff\nADD RHOMBUS\n";
        let mut src = ReaderTokens::new(input);
        let all: Vec<String> = std::iter::from_fn(|| src.next_token()).collect();
        assert_eq!(all, ["AREA", "\u{FFFD}", "ADD", "RHOMBUS"]);
        assert!(src.take_error().is_none());
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn read_error_is_kept_for_the_caller() {
        let mut src = ReaderTokens::new(io::BufReader::new(FailingReader));
        assert_eq!(src.next_token(), None);
        let err = src.take_error().expect("stored error");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(src.take_error().is_none());
    }

    #[test]
    fn reader_tokens_span_lines_and_skip_blank_ones() {
        let input = "ADD RHOMBUS\n\n  0 0\t1 0\n1 1 0 1\n";
        let mut src = ReaderTokens::new(Cursor::new(input));
        let all: Vec<String> = std::iter::from_fn(|| src.next_token()).collect();
        assert_eq!(
            all,
            ["ADD", "RHOMBUS", "0", "0", "1", "0", "1", "1", "0", "1"]
        );
        assert_eq!(src.next_token(), None);
    }
}
