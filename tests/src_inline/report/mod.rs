use super::*;

fn result(deviation_value: Option<f64>, score_difference: f64) -> DeviationResult {
    DeviationResult {
        candidate: 70.0 + score_difference,
        deviation_value,
        score_difference,
    }
}

#[test]
fn test_format_fixed() {
    assert_eq!(format_fixed(76.666_666, 2), "76.67");
    assert_eq!(format_fixed(13.743_685, 2), "13.74");
    assert_eq!(format_fixed(-0.001, 2), "0.00");
    assert_eq!(format_fixed(-1.5, 1), "-1.5");
}

#[test]
fn test_comparison_sentences() {
    assert_eq!(
        comparison_sentence(&result(Some(59.7), 13.333_333)),
        "13.33 points above the average."
    );
    assert_eq!(
        comparison_sentence(&result(Some(35.0), -15.0)),
        "15.00 points below the average."
    );
    assert_eq!(
        comparison_sentence(&result(Some(50.0), 0.0)),
        "Equal to the average."
    );
}

#[test]
fn test_deviation_line() {
    assert_eq!(deviation_line(&result(Some(59.7), 1.0)), "Deviation value: 59.7");
    assert!(deviation_line(&result(None, 1.0)).contains("cannot be computed"));
}
