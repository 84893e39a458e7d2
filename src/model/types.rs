use serde::{Deserialize, Serialize};

/// A validated form submission: course URL, hole number, stroke count.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoreQuery {
    pub url: String,
    pub hole: i32,
    pub strokes: i32,
}

/// View state for one render of the page.
#[derive(Clone, Debug, Default)]
pub struct ScorePage {
    pub result: Option<String>,
    pub hole: Option<i32>,
    pub trace: Option<DebugTrace>,
}

/// Ordered diagnostic log of the scrape, rendered verbatim in a `<pre>`
/// block. Append-only; not a logging framework.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DebugTrace {
    lines: Vec<String>,
}

impl DebugTrace {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
