//! Line-based input and output.

use std::io::{self, BufRead, Write};

/// The device a session talks to.
pub trait Console {
    /// Block until one line of input is available. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show the input prompt. Consoles without one may ignore it.
    fn prompt(&mut self, _prompt: &str) -> io::Result<()> {
        Ok(())
    }
}

/// A [`Console`] over any buffered reader and writer.
///
/// Wraps stdin/stdout in the binary; tests feed it byte slices and a `Vec`.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Create a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 reads as U+FFFD.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use lantern_core::{Direction, Player, WorldBuilder};

    use super::*;
    use crate::{Game, GameConfig};

    #[test]
    fn reads_lines_until_eof() {
        let mut console = LineConsole::new("go north\r\ntake twig\n".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("go north"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("take twig"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn writes_lines_and_prompt() {
        let mut console = LineConsole::new(io::empty(), Vec::new());
        console.write_line("Hello").unwrap();
        console.prompt("> ").unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Hello\n> ");
    }

    #[test]
    fn invalid_utf8_is_read_lossily() {
        let mut console = LineConsole::new(&b"take caf\xe9\r\nlook\n"[..], Vec::new());
        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("take caf\u{FFFD}")
        );
        assert_eq!(console.read_line().unwrap().as_deref(), Some("look"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_does_not_end_a_session() {
        let mut b = WorldBuilder::new();
        b.location("hall")
            .name("Hall")
            .item("lamp")
            .exit(Direction::North)
            .to("hall");
        let world = b.build().unwrap();
        let mut game = Game::new(world, Player::new(), GameConfig::default());

        let input: &[u8] = b"take caf\xe9\n\xff\xfe\ntake lamp\nquit\n";
        let mut console = LineConsole::new(input, Vec::new());
        game.play(&mut console).unwrap();

        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("You don't see a caf\u{FFFD} here."));
        assert!(out.contains("I don't know how to do that."));
        assert!(out.contains("You take the lamp."));
        assert!(out.contains("Goodbye."));
        assert!(game.is_finished());
    }
}
