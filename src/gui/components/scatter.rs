// src/gui/components/scatter.rs
//
// Scatter canvas: axes with ticks, one dot per point, decluttered labels with
// a thin connector when a label had to move away from its dot, and a hover
// readout for the dot nearest the pointer.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::config::consts::{DISPLACED_PX, LABEL_FONT_PX, POINT_RADIUS_PX};
use crate::gui::app::{LayoutKey, PlotApp};
use crate::plot::declutter::{self, Pos};
use crate::plot::frame::{PlotFrame, format_tick};

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 24.0;
const MARGIN_TOP: f32 = 16.0;
const MARGIN_BOTTOM: f32 = 48.0;
const TICK_LEN: f32 = 5.0;
const HOVER_RADIUS_PX: f32 = 8.0;

// matplotlib's default "C0"
const POINT_COLOR: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

fn to_pos2(p: Pos) -> Pos2 { Pos2::new(p.x as f32, p.y as f32) }

fn to_rect(r: Rect) -> declutter::Rect {
    declutter::Rect::from_min_max(
        Pos::new(r.min.x as f64, r.min.y as f64),
        Pos::new(r.max.x as f64, r.max.y as f64),
    )
}

pub fn draw(ui: &mut egui::Ui, app: &mut PlotApp) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let canvas = response.rect;
    let plot_rect = Rect::from_min_max(
        canvas.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
        canvas.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
    );
    if plot_rect.width() <= 1.0 || plot_rect.height() <= 1.0 {
        return;
    }

    let visuals = ui.visuals().clone();
    let fg = visuals.text_color();
    let grid = visuals.weak_text_color().linear_multiply(0.25);
    let font = FontId::proportional(LABEL_FONT_PX);

    let frame = PlotFrame::new(app.plot.bounds, to_rect(plot_rect));

    // Frame + ticks
    painter.rect_stroke(plot_rect, 0.0, Stroke::new(1.0, fg), StrokeKind::Inside);
    let n_x = ((plot_rect.width() / 90.0) as usize).clamp(2, 10);
    let n_y = ((plot_rect.height() / 60.0) as usize).clamp(2, 10);

    for v in frame.x_ticks(n_x) {
        let x = frame.to_screen(v, frame.bounds.y_min).x as f32;
        painter.line_segment(
            [Pos2::new(x, plot_rect.top()), Pos2::new(x, plot_rect.bottom())],
            Stroke::new(1.0, grid),
        );
        painter.line_segment(
            [Pos2::new(x, plot_rect.bottom()), Pos2::new(x, plot_rect.bottom() + TICK_LEN)],
            Stroke::new(1.0, fg),
        );
        painter.text(
            Pos2::new(x, plot_rect.bottom() + TICK_LEN + 2.0),
            Align2::CENTER_TOP,
            format_tick(v),
            font.clone(),
            fg,
        );
    }
    for v in frame.y_ticks(n_y) {
        let y = frame.to_screen(frame.bounds.x_min, v).y as f32;
        painter.line_segment(
            [Pos2::new(plot_rect.left(), y), Pos2::new(plot_rect.right(), y)],
            Stroke::new(1.0, grid),
        );
        painter.line_segment(
            [Pos2::new(plot_rect.left() - TICK_LEN, y), Pos2::new(plot_rect.left(), y)],
            Stroke::new(1.0, fg),
        );
        painter.text(
            Pos2::new(plot_rect.left() - TICK_LEN - 3.0, y),
            Align2::RIGHT_CENTER,
            format_tick(v),
            font.clone(),
            fg,
        );
    }

    // Axis names
    painter.text(
        Pos2::new(plot_rect.center().x, canvas.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        &app.plot.x_name,
        FontId::proportional(LABEL_FONT_PX + 2.0),
        fg,
    );
    painter.text(
        Pos2::new(canvas.left() + 4.0, plot_rect.top() - 2.0),
        Align2::LEFT_BOTTOM,
        &app.plot.y_name,
        FontId::proportional(LABEL_FONT_PX + 2.0),
        fg,
    );

    // Points
    let anchors: Vec<Pos> = app
        .plot
        .points
        .iter()
        .map(|p| frame.to_screen(p.x, p.y))
        .collect();
    for a in &anchors {
        painter.circle_filled(to_pos2(*a), POINT_RADIUS_PX, POINT_COLOR);
    }

    // Labels
    if app.show_labels && app.plot.has_labels() {
        let galleys: Vec<_> = app
            .plot
            .points
            .iter()
            .map(|p| {
                painter.layout_no_wrap(p.label.clone().unwrap_or_default(), font.clone(), fg)
            })
            .collect();

        let key = LayoutKey::new(plot_rect, LABEL_FONT_PX);
        let stale = app.layout.as_ref().is_none_or(|(k, _)| *k != key);
        if stale {
            let sizes: Vec<(f64, f64)> = galleys
                .iter()
                .map(|g| (g.size().x as f64, g.size().y as f64))
                .collect();
            let layout = declutter::declutter(&anchors, &sizes, to_rect(plot_rect), &app.params);
            app.layout = Some((key, layout));
        }

        if let Some((_, layout)) = &app.layout {
            for (label, galley) in layout.labels.iter().zip(galleys) {
                if label.is_displaced(DISPLACED_PX) {
                    painter.line_segment(
                        [to_pos2(label.anchor), to_pos2(label.connector_end())],
                        Stroke::new(0.5, fg),
                    );
                }
                painter.galley(to_pos2(label.rect.min), galley, fg);
            }
        }
    }

    // Hover readout
    app.hovered = response.hover_pos().and_then(|pointer| {
        anchors
            .iter()
            .enumerate()
            .map(|(i, a)| (i, to_pos2(*a).distance(pointer)))
            .filter(|(_, d)| *d <= HOVER_RADIUS_PX)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    });
    if let Some(i) = app.hovered {
        let p = &app.plot.points[i];
        let text = match &p.label {
            Some(l) => format!("{l}\n{} = {}\n{} = {}", app.plot.x_name, p.x, app.plot.y_name, p.y),
            None => format!("{} = {}\n{} = {}", app.plot.x_name, p.x, app.plot.y_name, p.y),
        };
        let galley = painter.layout_no_wrap(text, font, visuals.strong_text_color());
        let top_left = to_pos2(anchors[i]) + Vec2::new(10.0, -10.0 - galley.size().y);
        let bg = Rect::from_min_size(top_left, galley.size()).expand(4.0);

        painter.circle_stroke(to_pos2(anchors[i]), POINT_RADIUS_PX + 2.0, Stroke::new(1.5, POINT_COLOR));
        painter.rect_filled(bg, 3.0, visuals.extreme_bg_color);
        painter.rect_stroke(bg, 3.0, Stroke::new(1.0, POINT_COLOR), StrokeKind::Inside);
        painter.galley(top_left, galley, fg);
    }
}
