#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub label: String,
    pub density: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub num_points: usize,
    pub span_sigmas: f64,
}

impl CurveParams {
    pub fn default_v1() -> Self {
        Self {
            num_points: 101,
            span_sigmas: 4.0,
        }
    }

    pub fn with_points(num_points: usize) -> Self {
        let mut base = Self::default_v1();
        base.num_points = num_points;
        base
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::default_v1()
    }
}
