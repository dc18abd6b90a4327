//! Text command dispatcher over a `FigureArray`.
//!
//! Commands (whitespace-separated, may span lines):
//! - `ADD <TRAPEZOID|RHOMBUS|PENTAGON> x y ...` → `OK`
//! - `PRINT` → `#<i> <figure>` per figure
//! - `INFO` → `<i+1>) center=(x y) area=a` per figure
//! - `AREA` → total area
//! - `DELETE <i>` → `OK`
//! - `EQUAL <i> <j>` → `TRUE` / `FALSE`
//! - `STOP` → ends the session
//!
//! A rejected command prints `error: <message>` to the error sink and the
//! session continues. Read errors on the input and write errors on the sinks
//! abort it.

use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};
use figures::num::Num;
use figures::tokens::TokenSource;
use figures::{FigureArray, FigureKind, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Default)]
pub struct Session {
    figures: FigureArray,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &FigureArray {
        &self.figures
    }

    /// Dispatch commands until `STOP` or end of input. Returns the number of
    /// rejected commands.
    pub fn run<W: Write, E: Write>(
        &mut self,
        src: &mut dyn TokenSource,
        out: &mut W,
        err: &mut E,
    ) -> Result<usize> {
        let mut rejected = 0;
        while let Some(cmd) = src.next_token() {
            tracing::debug!(command = %cmd, "dispatch");
            match self.execute(&cmd, src, out) {
                Ok(Flow::Stop) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is::<io::Error>() => return Err(e),
                Err(e) => {
                    tracing::warn!(command = %cmd, error = %e, "command rejected");
                    rejected += 1;
                    writeln!(err, "error: {e}")?;
                }
            }
        }
        if let Some(e) = src.take_error() {
            return Err(anyhow::Error::new(e).context("reading commands"));
        }
        out.flush()?;
        Ok(rejected)
    }

    /// Execute one command whose keyword has already been consumed.
    pub fn execute<W: Write>(
        &mut self,
        cmd: &str,
        src: &mut dyn TokenSource,
        out: &mut W,
    ) -> Result<Flow> {
        match cmd {
            "ADD" => {
                let word = src
                    .next_token()
                    .ok_or_else(|| anyhow!("expected figure type"))?;
                let kind = FigureKind::from_keyword(&word)
                    .ok_or_else(|| anyhow!("unknown figure type {word:?}"))?;
                let shape = Shape::read_new(kind, src)?;
                self.figures.push(shape);
                writeln!(out, "OK")?;
            }
            "PRINT" => self.figures.print_all(out)?,
            "INFO" => self.figures.describe_all(out)?,
            "AREA" => writeln!(out, "{}", Num(self.figures.total_area()))?,
            "DELETE" => {
                let index = next_index(src).context("expected index")?;
                self.figures.remove(index)?;
                writeln!(out, "OK")?;
            }
            "EQUAL" => {
                let i = next_index(src).context("expected two indices")?;
                let j = next_index(src).context("expected two indices")?;
                let eq = self.figures.equal_at(i, j)?;
                writeln!(out, "{}", if eq { "TRUE" } else { "FALSE" })?;
            }
            "STOP" => return Ok(Flow::Stop),
            other => bail!("unknown command {other:?}"),
        }
        Ok(Flow::Continue)
    }
}

fn next_index(src: &mut dyn TokenSource) -> Result<usize> {
    let tok = src.next_token().ok_or_else(|| anyhow!("input exhausted"))?;
    tok.parse::<usize>()
        .map_err(|_| anyhow!("malformed index {tok:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures::tokens::ReaderTokens;

    fn drive(script: &str) -> (Session, String, String, usize) {
        let mut session = Session::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut src = script.split_whitespace();
        let rejected = session.run(&mut src, &mut out, &mut err).unwrap();
        (
            session,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            rejected,
        )
    }

    #[test]
    fn add_print_info_area() {
        let script = "ADD TRAPEZOID -2 0 2 0 1 2 -1 2\n\
                      ADD RHOMBUS 0 0 1 0 1 1 0 1\n\
                      PRINT INFO AREA STOP";
        let (session, out, err, rejected) = drive(script);
        assert_eq!(rejected, 0, "stderr: {err}");
        assert_eq!(session.figures().len(), 2);
        assert_eq!(
            out,
            "OK\nOK\n\
             #0 Trapezoid { (-2 0) (2 0) (1 2) (-1 2) }\n\
             #1 Rhombus { (0 0) (1 0) (1 1) (0 1) }\n\
             1) center=(0 0.888889) area=6\n\
             2) center=(0.5 0.5) area=1\n\
             7\n"
        );
    }

    #[test]
    fn delete_and_equal() {
        let script = "ADD RHOMBUS 0 0 1 0 1 1 0 1 \
                      ADD RHOMBUS 1 1 0 1 0 0 1 0 \
                      ADD TRAPEZOID 0 0 1 0 1 1 0 1 \
                      EQUAL 0 1 EQUAL 0 2 DELETE 0 AREA EQUAL 0 5";
        let (session, out, err, rejected) = drive(script);
        assert_eq!(out, "OK\nOK\nOK\nTRUE\nFALSE\nOK\n2\n");
        assert_eq!(rejected, 1);
        assert_eq!(err, "error: index 5 out of range (size 2)\n");
        assert_eq!(session.figures().len(), 2);
    }

    #[test]
    fn invalid_geometry_does_not_touch_collection() {
        let script = "ADD RHOMBUS 0 0 1 0 1 1 0 1 \
                      ADD RHOMBUS 0 0 2 0 2 1 0 1 \
                      AREA";
        let (session, out, err, rejected) = drive(script);
        assert_eq!(rejected, 1);
        assert!(err.starts_with("error: invalid Rhombus geometry"), "{err}");
        assert_eq!(out, "OK\n1\n");
        assert_eq!(session.figures().len(), 1);
    }

    #[test]
    fn malformed_commands_are_reported_and_skipped() {
        let (_, out, err, rejected) = drive("FOO DELETE x ADD HEXAGON AREA ADD");
        assert_eq!(out, "0\n");
        assert_eq!(rejected, 4);
        let lines: Vec<&str> = err.lines().collect();
        assert_eq!(lines[0], "error: unknown command \"FOO\"");
        assert_eq!(lines[1], "error: expected index");
        assert_eq!(lines[2], "error: unknown figure type \"HEXAGON\"");
        assert_eq!(lines[3], "error: expected figure type");
    }

    #[test]
    fn truncated_figure_is_a_parse_failure() {
        let (session, _, err, rejected) = drive("ADD PENTAGON 1 0 0.3");
        assert_eq!(rejected, 1);
        assert!(err.contains("failed to read Pentagon vertex 1"), "{err}");
        assert!(session.figures().is_empty());
    }

    #[test]
    fn non_finite_coordinate_is_a_parse_failure() {
        let (session, _, err, rejected) = drive("ADD RHOMBUS nan 0 1 0 1 1 0 1");
        assert_eq!(rejected, 1);
        assert!(
            err.starts_with("error: failed to read Rhombus vertex 0: malformed number \"nan\""),
            "{err}"
        );
        assert!(session.figures().is_empty());
    }

    #[test]
    fn invalid_utf8_line_is_rejected_and_later_commands_run() {
        let input: &[u8] = b"AREA\n\xff\nADD RHOMBUS 0 0 1 0 1 1 0 1\nAREA\n";
        let mut session = Session::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let rejected = session
            .run(&mut ReaderTokens::new(input), &mut out, &mut err)
            .unwrap();
        assert_eq!(rejected, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "0\nOK\n1\n");
        assert!(String::from_utf8(err).unwrap().starts_with("error: unknown command"));
        assert_eq!(session.figures().len(), 1);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn read_error_aborts_the_session() {
        let mut session = Session::new();
        let mut src = ReaderTokens::new(io::BufReader::new(FailingReader));
        let result = session.run(&mut src, &mut Vec::new(), &mut Vec::new());
        let e = result.unwrap_err();
        assert!(e.to_string().starts_with("reading commands"), "{e}");
        assert!(e.root_cause().downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn stop_ends_the_session() {
        let (_, out, _, _) = drive("AREA STOP AREA");
        assert_eq!(out, "0\n");
    }
}
