use crate::application::engine::CalculatorEngine;
use crate::domain::ports::{DisplayView, Renderer};
use crate::error::Result;
use crate::interfaces::keyboard::{dispatch, parse_keys};
use std::io::{BufRead, Write};

/// Writes display lines to one stream and alerts to another.
///
/// Typically stdout and stderr; tests hand it in-memory buffers.
pub struct TerminalRenderer<W: Write, E: Write> {
    out: W,
    err: E,
    quiet: bool,
}

impl<W: Write, E: Write> TerminalRenderer<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            quiet: false,
        }
    }

    /// Suppresses display lines; alerts are still written.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Renderer for TerminalRenderer<W, E> {
    fn render(&mut self, view: &DisplayView) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{view}")?;
        }
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "Error: {message}")?;
        Ok(())
    }
}

/// Replays keystroke lines against the engine, rendering after each line.
///
/// Blank lines and lines starting with `#` are skipped. Errors the user can
/// recover from (division by zero, overflow) are alerted and the session
/// continues; anything else ends it.
pub fn run_session<B, R>(engine: &mut CalculatorEngine, input: B, renderer: &mut R) -> Result<()>
where
    B: BufRead,
    R: Renderer,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for key in parse_keys(line) {
            match dispatch(engine, key) {
                Ok(()) => {}
                Err(e) if e.is_user_facing() => renderer.alert(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }
        renderer.render(&engine.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, String) {
        let mut engine = CalculatorEngine::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), Vec::new());
        run_session(&mut engine, input.as_bytes(), &mut renderer).unwrap();
        let (out, err) = renderer.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_renders_after_each_line() {
        let (out, err) = run("7 +\n5\n=\n");
        assert_eq!(out, "7 + | 7\n7 + | 5\n12\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let (out, _) = run("# warm up\n\n1+1=\n");
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_division_by_zero_is_alerted() {
        let (out, err) = run("10 / 0 =\n");
        assert_eq!(err, "Error: cannot divide by zero\n");
        assert_eq!(out, "10 ÷ | 0\n");
    }

    #[test]
    fn test_quiet_renderer() {
        let mut engine = CalculatorEngine::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), Vec::new()).quiet(true);
        run_session(&mut engine, "4*4=".as_bytes(), &mut renderer).unwrap();
        let (out, _) = renderer.into_inner();
        assert!(out.is_empty());
        assert_eq!(engine.display_string(), "16");
    }

    #[test]
    fn test_unknown_keys_do_not_end_session() {
        let (out, err) = run("1 + @\n2 =\n3 * 3 =\n");
        assert_eq!(out, "1 + | 1\n3\n9\n");
        assert!(err.is_empty());
    }
}
