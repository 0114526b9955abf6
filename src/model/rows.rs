/// One frequency-table row exactly as it was entered, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRow {
    pub score: String,
    pub count: String,
}

impl RawRow {
    pub fn new(score: impl Into<String>, count: impl Into<String>) -> Self {
        Self {
            score: score.into(),
            count: count.into(),
        }
    }
}

/// `count` observations at value `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRow {
    pub score: f64,
    pub count: u64,
}
