use tracing::trace;

/// Sink for the lines units speak during a round.
pub trait Narrator {
    fn narrate(&mut self, line: &str);
}

/// Keeps every narrated line in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Narrator for Transcript {
    fn narrate(&mut self, line: &str) {
        trace!(target: "skirmish.narration", line, "narrated");
        self.lines.push(line.to_owned());
    }
}
