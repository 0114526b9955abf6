pub mod session;
pub mod stage1_validate;
pub mod stage2_aggregate;
pub mod stage3_curve;
pub mod stage4_deviation;
pub mod stage5_report;
