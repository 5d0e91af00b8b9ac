//! End-to-end tests: configuration document to chart geometry

use chart_layout::*;
use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, PI};

const PIE_DOCUMENT: &str = r##"{
    "type": "pie",
    "title": "T",
    "series": [
        { "name": "A", "value": 30, "color": "#f00" },
        { "name": "B", "value": 70, "color": "#0f0" }
    ]
}"##;

#[test]
fn test_pie_document_end_to_end() {
    let config = ChartConfig::from_json(PIE_DOCUMENT).unwrap();
    assert!(validate_options(Some(&config)).is_empty());

    let options = normalize(&config).unwrap();
    assert!(!options.donut);

    let geometry = PieGeometry::for_canvas(400.0, options.height, options.donut);
    let slices = compute_pie_slices(&options.series, &geometry);

    assert_eq!(slices.len(), 2);
    let (a, b) = (&slices[0], &slices[1]);
    assert_eq!(a.name, "A");
    assert!((a.start_angle + FRAC_PI_2).abs() < 1e-12);
    assert!((a.end_angle - (-FRAC_PI_2 + 0.6 * PI)).abs() < 1e-12);
    assert_eq!(b.start_angle, a.end_angle);
    assert!((b.end_angle - (-FRAC_PI_2 + 2.0 * PI)).abs() < 1e-12);
    assert!((a.percentage - 30.0).abs() < 1e-9);
    assert!((b.percentage - 70.0).abs() < 1e-9);
    // B spans more than half the circle
    assert!(b.path_d.contains(" 0 1 1 "));
    assert!(a.path_d.contains(" 0 0 1 "));
}

#[test]
fn test_invalid_document_reports_every_problem() {
    let config = ChartConfig::from_json(
        r#"{ "type": "bar", "title": " ", "series": [{ "name": "X", "value": -1 }] }"#,
    )
    .unwrap();

    let errors = validate_options(Some(&config));
    assert_eq!(
        errors,
        vec![
            "Invalid chart type: \"bar\". Must be 'line', 'column', or 'pie'.".to_string(),
            "Chart title is required".to_string(),
            "Series[0] \"X\" has negative value".to_string(),
            "Series[0] \"X\" is missing a color".to_string(),
        ]
    );
    assert!(prepare(Some(&config), &ChartDefaults::default()).is_err());
}

#[test]
fn test_line_document_to_layout() {
    let config = ChartConfig::from_json(
        r##"{
            "type": "line",
            "title": "Revenue",
            "series": [
                { "name": "Jan", "value": 1200, "color": "#4f81bd" },
                { "name": "Feb", "value": 1800, "color": "#4f81bd" },
                { "name": "Mar", "value": 900, "color": "#4f81bd" }
            ],
            "yAxisTicks": 4
        }"##,
    )
    .unwrap();

    let options = prepare(Some(&config), &ChartDefaults::default()).unwrap();
    let layout = compute_layout(&options, 600.0, "rev");

    let ChartLayout::Line { points, grid_lines, area_path, .. } = layout else {
        panic!("expected a line layout");
    };
    assert_eq!(points[1].y, 20.0);
    assert_eq!(grid_lines.len(), 5);
    assert_eq!(grid_lines.last().unwrap().value, 2000.0);
    assert_eq!(grid_lines.last().unwrap().label, "2.0K");
    assert!(area_path.ends_with("L 570 270 L 60 270 Z"));
}

#[test]
fn test_hidden_series_relayout() {
    let config = ChartConfig::from_json(PIE_DOCUMENT).unwrap();
    let options = prepare(Some(&config), &ChartDefaults::default()).unwrap();

    let hidden: BTreeSet<usize> = [1].into_iter().collect();
    let visible = filter_hidden_series(&options, &hidden);
    let ChartLayout::Pie { slices, total, .. } = compute_layout(&visible, 400.0, "p") else {
        panic!("expected a pie layout");
    };

    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "A");
    assert_eq!(slices[0].percentage, 100.0);
    assert_eq!(total, 30.0);
}

#[test]
fn test_layout_is_deterministic() {
    let config = ChartConfig::from_json(PIE_DOCUMENT).unwrap();
    let options = normalize(&config).unwrap();

    assert_eq!(compute_layout(&options, 400.0, "same"), compute_layout(&options, 400.0, "same"));
}
