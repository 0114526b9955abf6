#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStats {
    pub average: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub total_count: u64,
    pub rows_used: usize,
    pub rows_dropped: usize,
}

impl AggregateStats {
    pub fn has_spread(&self) -> bool {
        self.std_dev > 0.0
    }
}
