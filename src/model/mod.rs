pub mod curve;
pub mod deviation;
pub mod rows;
pub mod stats;
