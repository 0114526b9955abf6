use super::*;

fn rows(pairs: &[(&str, &str)]) -> Vec<RawRow> {
    pairs.iter().map(|(s, c)| RawRow::new(*s, *c)).collect()
}

#[test]
fn test_weighted_mean_and_std_dev() {
    let stats = aggregate(&rows(&[("60", "2"), ("80", "3"), ("100", "1")])).unwrap();
    assert_eq!(stats.total_count, 6);
    assert!((stats.average - 460.0 / 6.0).abs() < 1e-9);
    let expected_var = (2.0 * (60.0f64 - 460.0 / 6.0).powi(2)
        + 3.0 * (80.0f64 - 460.0 / 6.0).powi(2)
        + (100.0f64 - 460.0 / 6.0).powi(2))
        / 6.0;
    assert!((stats.variance - expected_var).abs() < 1e-9);
    assert!((stats.variance - 188.888_888).abs() < 1e-4);
    assert!((stats.std_dev - 13.743_685).abs() < 1e-5);
}

#[test]
fn test_empty_input_returns_none() {
    assert!(aggregate(&[]).is_none());
    assert!(aggregate(&rows(&[("", "10"), ("50", "0"), ("x", "1")])).is_none());
}

#[test]
fn test_single_row_has_zero_std_dev() {
    let stats = aggregate(&rows(&[("70", "5")])).unwrap();
    assert_eq!(stats.average, 70.0);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.variance, 0.0);
    assert!(!stats.has_spread());
}

#[test]
fn test_identical_scores_never_produce_nan() {
    let stats = aggregate(&rows(&[("0.1", "3"), ("0.1", "7"), ("0.1", "11")])).unwrap();
    assert!(!stats.std_dev.is_nan());
    assert!(stats.std_dev >= 0.0);
}

#[test]
fn test_first_moment_balances() {
    let input = rows(&[("12.5", "3"), ("40", "8"), ("77.25", "1"), ("91", "4")]);
    let stats = aggregate(&input).unwrap();
    let balance: f64 = crate::pipeline::stage1_validate::validate_rows(&input)
        .iter()
        .map(|r| r.count as f64 * (r.score - stats.average))
        .sum();
    assert!(balance.abs() < 1e-9);
}

#[test]
fn test_order_independent_and_idempotent() {
    let a = rows(&[("55.1", "3"), ("70.3", "9"), ("88.8", "2"), ("31.7", "5")]);
    let mut b = a.clone();
    b.reverse();
    b.swap(0, 2);
    let first = aggregate(&a).unwrap();
    assert_eq!(first, aggregate(&a).unwrap());
    assert_eq!(first, aggregate(&b).unwrap());
}

#[test]
fn test_dropped_rows_are_reported() {
    let stats = aggregate(&rows(&[("60", "2"), ("", "10"), ("50", "0")])).unwrap();
    assert_eq!(stats.rows_used, 1);
    assert_eq!(stats.rows_dropped, 2);
}

#[test]
fn test_score_sum_overflow_is_treated_as_empty() {
    assert!(aggregate(&rows(&[("1e308", "2"), ("1e308", "1")])).is_none());
}

#[test]
fn test_variance_overflow_is_treated_as_empty() {
    assert!(aggregate(&rows(&[("-1e200", "1"), ("1e200", "1")])).is_none());
}

#[test]
fn test_count_overflow_is_treated_as_empty() {
    let input = vec![
        ScoreRow {
            score: 1.0,
            count: u64::MAX,
        },
        ScoreRow {
            score: 2.0,
            count: 1,
        },
    ];
    assert!(aggregate_valid(&input).is_none());
}
