// src/plot/declutter.rs
//
// Force-directed label placement in screen space (pixels, y grows downward).
//
// Each pass:
//   1. every pair of overlapping label boxes (scaled by `expand_text`) pushes
//      apart by its overlap extent times `force_text`;
//   2. every point inside a label box (scaled by `expand_points`) pushes that
//      label out by the remaining distance times `force_points`;
//   3. boxes are clamped to the plot area.
// The loop stops when no overlaps remain, when total movement drops below
// `precision`, or after `max_iterations` passes. The best placement seen
// (fewest overlaps) is returned, so the result never has more overlaps than
// the starting placement.

use crate::config::options::DeclutterParams;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn distance(&self, other: Pos) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    pub fn from_min_max(min: Pos, max: Pos) -> Self { Self { min, max } }

    pub fn from_min_size(min: Pos, w: f64, h: f64) -> Self {
        Self { min, max: Pos::new(min.x + w, min.y + h) }
    }

    pub fn width(&self) -> f64 { self.max.x - self.min.x }
    pub fn height(&self) -> f64 { self.max.y - self.min.y }

    pub fn center(&self) -> Pos {
        Pos::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// Scale about the centre.
    pub fn expand(&self, (fx, fy): (f64, f64)) -> Self {
        let c = self.center();
        let (hw, hh) = (self.width() * fx * 0.5, self.height() * fy * 0.5);
        Self { min: Pos::new(c.x - hw, c.y - hh), max: Pos::new(c.x + hw, c.y + hh) }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            min: Pos::new(self.min.x + dx, self.min.y + dy),
            max: Pos::new(self.max.x + dx, self.max.y + dy),
        }
    }

    /// Overlap extent along each axis; both positive only when the interiors
    /// intersect (touching edges do not count).
    pub fn overlap(&self, other: &Rect) -> Option<(f64, f64)> {
        let ox = self.max.x.min(other.max.x) - self.min.x.max(other.min.x);
        let oy = self.max.y.min(other.max.y) - self.min.y.max(other.min.y);
        (ox > 0.0 && oy > 0.0).then_some((ox, oy))
    }

    /// Strictly inside.
    pub fn contains(&self, p: Pos) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Shift (not shrink) so the box lies inside `area`, as far as it fits.
    pub fn clamp_inside(&self, area: &Rect) -> Self {
        let dx = if self.min.x < area.min.x {
            area.min.x - self.min.x
        } else if self.max.x > area.max.x {
            (area.max.x - self.max.x).max(area.min.x - self.min.x)
        } else {
            0.0
        };
        let dy = if self.min.y < area.min.y {
            area.min.y - self.min.y
        } else if self.max.y > area.max.y {
            (area.max.y - self.max.y).max(area.min.y - self.min.y)
        } else {
            0.0
        };
        self.translate(dx, dy)
    }

    /// Point on the box edge closest to `p` (or `p` itself when inside).
    pub fn nearest_point(&self, p: Pos) -> Pos {
        Pos::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }
}

/// A label box tied to the point it annotates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub anchor: Pos,
    pub rect: Rect,
}

impl LabelBox {
    /// Naive placement: text starts at the point and sits on it, the way a
    /// left/baseline aligned text would.
    pub fn at_anchor(anchor: Pos, (w, h): (f64, f64)) -> Self {
        Self { anchor, rect: Rect::from_min_size(Pos::new(anchor.x, anchor.y - h), w, h) }
    }

    /// Distance from the anchor to the nearest edge of the box.
    pub fn displacement(&self) -> f64 {
        self.anchor.distance(self.rect.nearest_point(self.anchor))
    }

    pub fn is_displaced(&self, tolerance: f64) -> bool {
        self.displacement() > tolerance
    }

    /// Where a connector from the anchor should meet the label.
    pub fn connector_end(&self) -> Pos {
        self.rect.nearest_point(self.anchor)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub labels: Vec<LabelBox>,
    pub iterations: usize,
    pub overlaps_before: usize,
    pub overlaps_after: usize,
}

/// Label-label overlapping pairs plus (label, point) pairs with the point
/// inside the label, using the expansion factors from `params`.
pub fn count_overlaps(labels: &[LabelBox], points: &[Pos], params: &DeclutterParams) -> usize {
    let text: Vec<Rect> = labels.iter().map(|l| l.rect.expand(params.expand_text)).collect();
    let mut n = 0;
    for i in 0..text.len() {
        for j in i + 1..text.len() {
            if text[i].overlap(&text[j]).is_some() {
                n += 1;
            }
        }
    }
    for l in labels {
        let r = l.rect.expand(params.expand_points);
        n += points.iter().filter(|p| r.contains(**p)).count();
    }
    n
}

/// Place one label of size `sizes[i]` next to each `anchors[i]`, inside `area`,
/// with as few overlaps as the bounded search finds.
pub fn declutter(
    anchors: &[Pos],
    sizes: &[(f64, f64)],
    area: Rect,
    params: &DeclutterParams,
) -> Layout {
    debug_assert_eq!(anchors.len(), sizes.len());

    let mut labels: Vec<LabelBox> = anchors
        .iter()
        .zip(sizes)
        .map(|(a, s)| {
            let mut b = LabelBox::at_anchor(*a, *s);
            b.rect = b.rect.clamp_inside(&area);
            b
        })
        .collect();

    let overlaps_before = count_overlaps(&labels, anchors, params);
    let mut best = labels.clone();
    let mut best_overlaps = overlaps_before;
    let mut iterations = 0;

    while best_overlaps > 0 && iterations < params.max_iterations {
        iterations += 1;

        let moves = forces(&labels, anchors, params);
        let mut moved = 0.0;
        for (label, (dx, dy)) in labels.iter_mut().zip(moves) {
            let before = label.rect.min;
            label.rect = label.rect.translate(dx, dy).clamp_inside(&area);
            moved += label.rect.min.distance(before);
        }

        let overlaps = count_overlaps(&labels, anchors, params);
        if overlaps < best_overlaps {
            best_overlaps = overlaps;
            best.clone_from(&labels);
        }
        if moved < params.precision {
            break;
        }
    }

    logd!(
        "Declutter: {} label(s), overlaps {} -> {} in {} pass(es)",
        labels.len(), overlaps_before, best_overlaps, iterations
    );
    Layout { labels: best, iterations, overlaps_before, overlaps_after: best_overlaps }
}

/// Push direction along one axis. Coincident centres split by index so that
/// stacked duplicates still separate.
fn push_sign(delta: f64, first: bool) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else if first {
        -1.0
    } else {
        1.0
    }
}

fn forces(labels: &[LabelBox], points: &[Pos], params: &DeclutterParams) -> Vec<(f64, f64)> {
    let mut moves = vec![(0.0, 0.0); labels.len()];
    let text: Vec<Rect> = labels.iter().map(|l| l.rect.expand(params.expand_text)).collect();

    for i in 0..text.len() {
        for j in i + 1..text.len() {
            let Some((ox, oy)) = text[i].overlap(&text[j]) else { continue };
            let (ci, cj) = (text[i].center(), text[j].center());
            let dx = push_sign(ci.x - cj.x, true) * ox * params.force_text;
            let dy = push_sign(ci.y - cj.y, true) * oy * params.force_text;
            moves[i].0 += dx;
            moves[i].1 += dy;
            moves[j].0 -= dx;
            moves[j].1 -= dy;
        }
    }

    for (i, label) in labels.iter().enumerate() {
        let r = label.rect.expand(params.expand_points);
        let c = r.center();
        let (hw, hh) = (r.width() * 0.5, r.height() * 0.5);
        for p in points.iter().filter(|p| r.contains(**p)) {
            let (dx, dy) = (c.x - p.x, c.y - p.y);
            moves[i].0 += push_sign(dx, true) * (hw - dx.abs()) * params.force_points;
            moves[i].1 += push_sign(dy, true) * (hh - dy.abs()) * params.force_points;
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::from_min_max(Pos::new(0.0, 0.0), Pos::new(400.0, 300.0))
    }

    #[test]
    fn rect_overlap_and_contains() {
        let a = Rect::from_min_size(Pos::new(0.0, 0.0), 10.0, 10.0);
        let b = Rect::from_min_size(Pos::new(5.0, 5.0), 10.0, 10.0);
        let c = Rect::from_min_size(Pos::new(10.0, 0.0), 10.0, 10.0);
        assert_eq!(a.overlap(&b), Some((5.0, 5.0)));
        assert_eq!(a.overlap(&c), None); // touching only
        assert!(a.contains(Pos::new(5.0, 5.0)));
        assert!(!a.contains(Pos::new(10.0, 5.0)));
    }

    #[test]
    fn clamp_keeps_size() {
        let r = Rect::from_min_size(Pos::new(390.0, -5.0), 40.0, 12.0).clamp_inside(&area());
        assert_eq!(r.min, Pos::new(360.0, 0.0));
        assert_eq!((r.width(), r.height()), (40.0, 12.0));
    }

    #[test]
    fn naive_label_sits_on_its_point() {
        let b = LabelBox::at_anchor(Pos::new(50.0, 50.0), (30.0, 12.0));
        assert_eq!(b.rect.min, Pos::new(50.0, 38.0));
        assert!(!b.is_displaced(0.5));
    }

    #[test]
    fn separated_labels_left_alone() {
        let anchors = [Pos::new(20.0, 50.0), Pos::new(200.0, 200.0)];
        let sizes = [(30.0, 12.0), (30.0, 12.0)];
        let out = declutter(&anchors, &sizes, area(), &DeclutterParams::default());
        assert_eq!(out.overlaps_before, 0);
        assert_eq!(out.iterations, 0);
        assert!(out.labels.iter().all(|l| !l.is_displaced(0.5)));
    }

    #[test]
    fn stacked_labels_spread_out() {
        // five labels on nearly the same spot
        let anchors: Vec<Pos> = (0..5).map(|i| Pos::new(200.0 + i as f64, 150.0)).collect();
        let sizes = vec![(40.0, 12.0); 5];
        let params = DeclutterParams::default();
        let out = declutter(&anchors, &sizes, area(), &params);

        assert!(out.overlaps_before > 0);
        assert!(out.overlaps_after < out.overlaps_before);
        assert!(out.iterations <= params.max_iterations);
        assert_eq!(count_overlaps(&out.labels, &anchors, &params), out.overlaps_after);
        assert!(out.labels.iter().any(|l| l.is_displaced(1.0)));
    }

    #[test]
    fn overlaps_never_increase_and_stay_in_area() {
        let anchors: Vec<Pos> = (0..30)
            .map(|i| Pos::new(10.0 + (i * 37 % 380) as f64, 10.0 + (i * 53 % 280) as f64))
            .collect();
        let sizes = vec![(55.0, 14.0); anchors.len()];
        let params = DeclutterParams { max_iterations: 50, ..DeclutterParams::default() };
        let out = declutter(&anchors, &sizes, area(), &params);

        assert!(out.overlaps_after <= out.overlaps_before);
        assert!(out.iterations <= 50);
        let a = area();
        for l in &out.labels {
            assert!(l.rect.min.x >= a.min.x && l.rect.max.x <= a.max.x);
            assert!(l.rect.min.y >= a.min.y && l.rect.max.y <= a.max.y);
        }
    }

    #[test]
    fn empty_input() {
        let out = declutter(&[], &[], area(), &DeclutterParams::default());
        assert!(out.labels.is_empty());
        assert_eq!(out.overlaps_after, 0);
    }
}
