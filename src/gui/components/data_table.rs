// src/gui/components/data_table.rs
//
// Side table of the plotted rows, in plot order. The row under the pointer
// on the canvas is highlighted.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::PlotApp;
use crate::plot::frame::format_tick;

pub fn draw(ui: &mut egui::Ui, app: &PlotApp) {
    let plot = &app.plot;
    let labelled = plot.has_labels();
    let highlight = ui.visuals().selection.bg_fill;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(36.0));
    if labelled {
        table = table.column(Column::initial(120.0).resizable(true).clip(true).at_least(40.0));
    }
    table = table
        .column(Column::auto().at_least(50.0))
        .column(Column::remainder().at_least(50.0));

    table
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            if labelled {
                header.col(|ui| { ui.strong(crate::config::consts::LABEL_COLUMN); });
            }
            header.col(|ui| { ui.strong(&plot.x_name); });
            header.col(|ui| { ui.strong(&plot.y_name); });
        })
        .body(|body| {
            body.rows(18.0, plot.points.len(), |mut row| {
                let ix = row.index();
                let p = &plot.points[ix];
                let hot = app.hovered == Some(ix);
                let cell = |text: String| {
                    let rt = RichText::new(text);
                    if hot { rt.background_color(highlight) } else { rt }
                };

                row.col(|ui| { ui.weak(p.row.to_string()); });
                if labelled {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(cell(p.label.clone().unwrap_or_default()));
                    });
                }
                for v in [p.x, p.y] {
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(cell(format_tick(v)));
                        });
                    });
                }
            });
        });
}
