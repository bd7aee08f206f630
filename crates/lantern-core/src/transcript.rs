/// Lines of output collected during a turn, flushed to the console afterwards.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line of output.
    pub fn say(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Lines collected so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take all collected lines, leaving the transcript empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Whether nothing has been said since the last drain.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if any collected line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_buffer() {
        let mut t = Transcript::new();
        t.say("one");
        t.say(String::from("two"));
        assert!(t.contains("tw"));
        assert_eq!(t.drain(), vec!["one", "two"]);
        assert!(t.is_empty());
    }
}
