use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreLabel {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    OverPar(i32),
    UnderPar(i32),
}

impl ScoreLabel {
    /// Maps strokes-minus-par to its golf term. Only -3..=2 have named
    /// variants; anything below -3 falls through to `UnderPar`, which
    /// carries the absolute difference.
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            0 => ScoreLabel::Par,
            -1 => ScoreLabel::Birdie,
            -2 => ScoreLabel::Eagle,
            -3 => ScoreLabel::Albatross,
            1 => ScoreLabel::Bogey,
            2 => ScoreLabel::DoubleBogey,
            d if d > 2 => ScoreLabel::OverPar(d),
            d => ScoreLabel::UnderPar(-d),
        }
    }
}

impl From<i32> for ScoreLabel {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLabel::Albatross => write!(f, "Albatross"),
            ScoreLabel::Eagle => write!(f, "Eagle"),
            ScoreLabel::Birdie => write!(f, "Birdie"),
            ScoreLabel::Par => write!(f, "Par"),
            ScoreLabel::Bogey => write!(f, "Bogey"),
            ScoreLabel::DoubleBogey => write!(f, "Double Bogey"),
            ScoreLabel::OverPar(diff) => write!(f, "{diff}-over par"),
            ScoreLabel::UnderPar(diff) => write!(f, "{diff}-under par"),
        }
    }
}

/// No bounds checking on par or strokes; the arithmetic stands on its own.
#[must_use]
pub fn interpret(par: i32, strokes: i32) -> String {
    ScoreLabel::from_diff(strokes - par).to_string()
}
