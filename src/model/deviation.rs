use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationResult {
    pub candidate: f64,
    /// `None` when the distribution has no spread.
    pub deviation_value: Option<f64>,
    pub score_difference: f64,
}

impl DeviationResult {
    pub fn comparison(&self) -> ScoreComparison {
        ScoreComparison::from_difference(self.score_difference)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComparison {
    Above,
    Below,
    Equal,
}

impl ScoreComparison {
    pub fn from_difference(diff: f64) -> Self {
        if diff > 0.0 {
            ScoreComparison::Above
        } else if diff < 0.0 {
            ScoreComparison::Below
        } else {
            ScoreComparison::Equal
        }
    }
}

/// Linear rescaling applied to the z-score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationScale {
    pub mean: f64,
    pub scale: f64,
}

impl DeviationScale {
    pub fn default_v1() -> Self {
        Self {
            mean: 50.0,
            scale: 10.0,
        }
    }
}

impl Default for DeviationScale {
    fn default() -> Self {
        Self::default_v1()
    }
}
