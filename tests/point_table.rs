use approx::assert_relative_eq;
use profile_aligner::data::{format_points, parse_points};
use profile_aligner::math::point3;

#[test]
fn test_parse_trims_whitespace_and_folds_case() {
    let text = " 1, 2.5, -3\n  4 , 5E2 ,\t6 \n";
    let points = parse_points(text).unwrap();

    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].x, 1.0);
    assert_relative_eq!(points[0].y, 2.5);
    assert_relative_eq!(points[0].z, -3.0);
    assert_relative_eq!(points[1].y, 500.0);
}

#[test]
fn test_parse_preserves_row_order() {
    let text = "3, 0, 0\n1, 0, 0\n2, 0, 0\n";
    let points = parse_points(text).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].x, 3.0);
    assert_eq!(points[1].x, 1.0);
    assert_eq!(points[2].x, 2.0);
}

#[test]
fn test_parse_skips_blank_lines() {
    let text = "1, 2, 3\n\n   \n4, 5, 6\n";
    let points = parse_points(text).unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn test_parse_reports_wrong_field_count_with_row_number() {
    let text = "1, 2, 3\n4, 5\n";
    let err = parse_points(text).unwrap_err();
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_parse_reports_non_numeric_field() {
    let text = "1, 2, 3\n4, depth, 6\n";
    let err = parse_points(text).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("row 2"));
    assert!(message.contains("depth"));
}

#[test]
fn test_export_round_trips_at_full_precision() {
    // Values with no short decimal representation must survive an
    // export/parse cycle bit for bit.
    let points = vec![
        point3(0.1 + 0.2, 1.0 / 3.0, -9876.54321),
        point3(std::f64::consts::PI, 2.0_f64.sqrt(), 1e-17),
    ];
    let text = format_points(&points);
    let reparsed = parse_points(&text).unwrap();

    assert_eq!(points.len(), reparsed.len());
    for (p, q) in points.iter().zip(reparsed.iter()) {
        assert_eq!(p.x, q.x);
        assert_eq!(p.y, q.y);
        assert_eq!(p.z, q.z);
    }
}

#[test]
fn test_export_format_matches_input_format() {
    let points = vec![point3(0.0, 10.0, -2.5)];
    assert_eq!(format_points(&points), "0, 10, -2.5\n");
}
