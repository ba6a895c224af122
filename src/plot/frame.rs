// src/plot/frame.rs
//
// Data-to-screen mapping for the scatter canvas, plus axis ticks.

use super::Bounds;
use super::declutter::{Pos, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub bounds: Bounds,
    pub area: Rect,
}

impl PlotFrame {
    /// Degenerate spans (all points on one value, or no points) are widened
    /// to one unit so the mapping stays finite.
    pub fn new(bounds: Bounds, area: Rect) -> Self {
        let mut b = bounds;
        if b.x_max <= b.x_min {
            b.x_max = b.x_min + 1.0;
        }
        if b.y_max <= b.y_min {
            b.y_max = b.y_min + 1.0;
        }
        Self { bounds: b, area }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos {
        let fx = (x - self.bounds.x_min) / self.bounds.width();
        let fy = (y - self.bounds.y_min) / self.bounds.height();
        Pos::new(
            self.area.min.x + fx * self.area.width(),
            self.area.max.y - fy * self.area.height(),
        )
    }

    pub fn x_ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.bounds.x_min, self.bounds.x_max, target)
    }

    pub fn y_ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.bounds.y_min, self.bounds.y_max, target)
    }
}

/// Step of the form 1, 2 or 5 times a power of ten giving roughly `target`
/// intervals across `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) {
        return 1.0;
    }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag - 1e-9;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of the nice step that fall inside `[lo, hi]`.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    let step = nice_step(hi - lo, target);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Tick text without trailing zero noise (`100`, `2.5`, `0.02`).
pub fn format_tick(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
