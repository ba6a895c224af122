// tests/plot_prepare.rs
use std::fs;
use std::path::PathBuf;

use pfr_stats::config::options::DeclutterParams;
use pfr_stats::file::load_record_set;
use pfr_stats::plot::declutter::{Pos, Rect, declutter};
use pfr_stats::plot::frame::PlotFrame;
use pfr_stats::plot::{Bounds, prepare};
use pfr_stats::StatsError;

fn write_csv(name: &str, body: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("pfr_it_plot_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("table.csv");
    fs::write(&path, body).unwrap();
    path
}

const ABC: &str = ",Player,Yds,TD\n0,A,100,2\n1,B,50,1\n2,C,75,0\n";

#[test]
fn example_table_bounds_and_labels() {
    let rs = load_record_set(&write_csv("abc", ABC)).unwrap();
    let plot = prepare(&rs, "Yds", "TD", 50).unwrap();

    assert_eq!(plot.bounds, Bounds { x_min: 0.0, x_max: 100.0, y_min: 0.0, y_max: 2.0 });
    let labels: Vec<&str> = plot.points.iter().filter_map(|p| p.label.as_deref()).collect();
    assert_eq!(labels, ["A", "B", "C"]);
}

#[test]
fn absent_column() {
    let rs = load_record_set(&write_csv("absent", ABC)).unwrap();
    let err = prepare(&rs, "Yds", "INT", 50).unwrap_err();
    assert!(matches!(err, StatsError::ColumnNotFound(ref c) if c == "INT"));
}

#[test]
fn limit_zero_and_limit_larger_than_table() {
    let rs = load_record_set(&write_csv("limits", ABC)).unwrap();
    assert_eq!(prepare(&rs, "Yds", "TD", 0).unwrap().rows_used, 0);
    assert_eq!(prepare(&rs, "Yds", "TD", 1).unwrap().rows_used, 1);
    assert_eq!(prepare(&rs, "Yds", "TD", 500).unwrap().rows_used, 3);
}

#[test]
fn missing_input_file() {
    let path = std::env::temp_dir().join("pfr_it_plot_nowhere").join("missing.csv");
    assert!(matches!(load_record_set(&path), Err(StatsError::Path(_))));
}

#[test]
fn labels_on_screen_are_decluttered() {
    // twenty players bunched into a small corner of the data range
    let mut body = String::from(",Player,Yds,TD\n");
    for i in 0..20 {
        body.push_str(&format!("{i},Player Number {i},{},{}\n", 1000 + i * 3, 10 + i % 3));
    }
    body.push_str("20,Outlier,5000,40\n");
    let rs = load_record_set(&write_csv("crowd", &body)).unwrap();
    let plot = prepare(&rs, "Yds", "TD", 50).unwrap();

    let area = Rect::from_min_max(Pos::new(0.0, 0.0), Pos::new(800.0, 500.0));
    let frame = PlotFrame::new(plot.bounds, area);
    let anchors: Vec<Pos> = plot.points.iter().map(|p| frame.to_screen(p.x, p.y)).collect();
    let sizes = vec![(90.0, 14.0); anchors.len()];

    let params = DeclutterParams::default();
    let layout = declutter(&anchors, &sizes, area, &params);
    assert!(layout.overlaps_before > 0);
    assert!(layout.overlaps_after < layout.overlaps_before);
    assert!(layout.iterations <= params.max_iterations);
}
