// src/plot/mod.rs
//
// Scatter plot of two record-set columns.
//
// `prepare` does everything that can fail (column lookup, number parsing) and
// produces a ScatterPlot in data coordinates. `frame` maps data to screen
// space and `declutter` moves labels apart; both are pure so they can be
// tested without a window. The window itself lives in `crate::gui`.

pub mod declutter;
pub mod frame;

use crate::config::consts::LABEL_COLUMN;
use crate::data::RecordSet;
use crate::error::{Result, StatsError};

/// Axis ranges. The low end of each axis always includes 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// `[min(0, min x), max x] x [min(0, min y), max y]`; all zero when empty.
    pub fn including_origin<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut it = points.into_iter().peekable();
        if it.peek().is_none() {
            return Self { x_min: 0.0, x_max: 0.0, y_min: 0.0, y_max: 0.0 };
        }

        let (mut x_lo, mut x_hi) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_lo, mut y_hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in it {
            x_lo = x_lo.min(x);
            x_hi = x_hi.max(x);
            y_lo = y_lo.min(y);
            y_hi = y_hi.max(y);
        }
        Self { x_min: x_lo.min(0.0), x_max: x_hi, y_min: y_lo.min(0.0), y_max: y_hi }
    }

    pub fn width(&self) -> f64 { self.x_max - self.x_min }
    pub fn height(&self) -> f64 { self.y_max - self.y_min }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    /// Position of the source row within the record set.
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub x_name: String,
    pub y_name: String,
    pub points: Vec<ScatterPoint>,
    pub bounds: Bounds,
    /// Rows taken from the record set (`min(len, limit)`), plotted or not.
    pub rows_used: usize,
}

impl ScatterPlot {
    pub fn has_labels(&self) -> bool {
        self.points.iter().any(|p| p.label.is_some())
    }
}

/// Parse one cell for plotting. Blank cells are missing values (`None`);
/// anything else must be a finite number.
pub fn parse_number(column: &str, row: usize, text: &str) -> Result<Option<f64>> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(StatsError::Conversion { column: s!(column), row, value: s!(text) }),
    }
}

/// Select `x_col` and `y_col` from the first `min(len, limit)` rows, in their
/// original order, and compute bounds. Points carry the `Player` cell as a
/// label when that column exists.
pub fn prepare(rs: &RecordSet, x_col: &str, y_col: &str, limit: usize) -> Result<ScatterPlot> {
    let xi = rs.require_column(x_col)?;
    let yi = rs.require_column(y_col)?;
    let li = rs.column_index(LABEL_COLUMN);

    let view = rs.head(limit);
    let mut points = Vec::with_capacity(view.len());
    let mut skipped = 0usize;

    let cells = view.column_values(xi).zip(view.column_values(yi));
    for (row, (x_text, y_text)) in cells.enumerate() {
        let x = parse_number(x_col, row, x_text)?;
        let y = parse_number(y_col, row, y_text)?;
        let (Some(x), Some(y)) = (x, y) else {
            skipped += 1;
            continue;
        };
        let label = li.and_then(|ci| view.row(row)?.get(ci).cloned());
        points.push(ScatterPoint { row, x, y, label });
    }

    if skipped > 0 {
        logw!("Plot: {skipped} row(s) with blank {x_col}/{y_col} not plotted");
    }
    let bounds = Bounds::including_origin(points.iter().map(|p| (p.x, p.y)));
    logd!("Plot: {} of {} row(s) plotted, bounds {:?}", points.len(), view.len(), bounds);

    Ok(ScatterPlot {
        x_name: s!(x_col),
        y_name: s!(y_col),
        points,
        bounds,
        rows_used: view.len(),
    })
}

/// Prepare and show the plot window. Blocks until the window is closed.
#[cfg(feature = "gui")]
pub fn render(rs: &RecordSet, x_col: &str, y_col: &str, limit: usize) -> Result<()> {
    let plot = prepare(rs, x_col, y_col, limit)?;
    crate::gui::run(crate::gui::native_options(), plot)
}
