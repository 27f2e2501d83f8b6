use approx::assert_relative_eq;
use profile_aligner::math::{point3, Point3};
use profile_aligner::plot::{nearest_point, project, Bounds, PLOT_HEIGHT, PLOT_WIDTH};

fn wide_profile() -> Vec<Point3> {
    vec![
        point3(0.0, 0.0, 0.0),
        point3(100.0, 10.0, -3.0),
        point3(50.0, 5.0, 1.0),
    ]
}

#[test]
fn test_bounds_cover_x_and_y_only() {
    let bounds = Bounds::of(&wide_profile());
    assert_relative_eq!(bounds.x_min, 0.0);
    assert_relative_eq!(bounds.x_max, 100.0);
    assert_relative_eq!(bounds.y_min, 0.0);
    assert_relative_eq!(bounds.y_max, 10.0);
}

#[test]
fn test_fit_scale_limited_by_width_for_wide_data() {
    // X extent 100 vs Y extent 10 is wider than the 800x400 canvas shape,
    // so the horizontal fit decides the scale.
    let bounds = Bounds::of(&wide_profile());
    assert_relative_eq!(bounds.fit_scale(PLOT_WIDTH, PLOT_HEIGHT), 8.0);
}

#[test]
fn test_fit_scale_limited_by_height_for_tall_data() {
    let points = vec![point3(0.0, 0.0, 0.0), point3(10.0, 100.0, 0.0)];
    let bounds = Bounds::of(&points);
    assert_relative_eq!(bounds.fit_scale(PLOT_WIDTH, PLOT_HEIGHT), 4.0);
}

#[test]
fn test_projection_centers_and_flips_y() {
    let plotted = project(&wide_profile(), 1.0);

    // Scale 8, no horizontal margin, vertical margin (400 - 80) / 2 = 160.
    assert_relative_eq!(plotted[0][0], 0.0);
    assert_relative_eq!(plotted[0][1], 240.0);
    assert_relative_eq!(plotted[1][0], 800.0);
    assert_relative_eq!(plotted[1][1], 160.0);
}

#[test]
fn test_exaggeration_stretches_from_the_midline() {
    let flat = project(&wide_profile(), 1.0);
    let stretched = project(&wide_profile(), 2.0);

    for (f, s) in flat.iter().zip(stretched.iter()) {
        assert_relative_eq!(f[0], s[0]);
        let mid = PLOT_HEIGHT / 2.0;
        assert_relative_eq!((f[1] - mid) * 2.0 + mid, s[1]);
    }
}

#[test]
fn test_nearest_point_picks_closest_in_pixel_space() {
    let plotted = vec![[0.0, 0.0], [100.0, 100.0], [101.0, 99.0]];
    assert_eq!(nearest_point(&plotted, [98.0, 101.0]), Some(1));
    assert_eq!(nearest_point(&plotted, [3.0, 1.0]), Some(0));
}

#[test]
fn test_nearest_point_first_wins_ties() {
    let plotted = vec![[10.0, 0.0], [30.0, 0.0]];
    assert_eq!(nearest_point(&plotted, [20.0, 0.0]), Some(0));
}

#[test]
fn test_nearest_point_on_empty_set() {
    assert_eq!(nearest_point(&[], [1.0, 2.0]), None);
}
