// src/gui/app.rs
use eframe::egui::{self, ViewportBuilder};

use crate::{
    config::{
        consts::{WINDOW_H, WINDOW_W},
        options::DeclutterParams,
    },
    error::{Result, StatsError},
    plot::{ScatterPlot, declutter::Layout},
};

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("pfr_plot")
            .with_inner_size([WINDOW_W, WINDOW_H]),
        ..Default::default()
    }
}

/// Open the plot window; returns when it is closed.
pub fn run(options: eframe::NativeOptions, plot: ScatterPlot) -> Result<()> {
    let title = format!("{} vs {}", plot.y_name, plot.x_name);
    logf!("Plot: opening window for {} point(s)", plot.points.len());
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotApp::new(plot)))),
    )
    .map_err(|e| StatsError::Gui(e.to_string()))
}

/// Key for the cached label layout: canvas rect and font size, in whole
/// tenths of a pixel so tiny float jitter doesn't force a re-run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutKey([i32; 5]);

impl LayoutKey {
    pub fn new(rect: egui::Rect, font_px: f32) -> Self {
        let q = |v: f32| (v * 10.0).round() as i32;
        Self([q(rect.min.x), q(rect.min.y), q(rect.max.x), q(rect.max.y), q(font_px)])
    }
}

pub struct PlotApp {
    pub plot: ScatterPlot,
    pub params: DeclutterParams,

    // view toggles
    pub show_labels: bool,
    pub show_table: bool,

    // declutter result for the current canvas size
    pub layout: Option<(LayoutKey, Layout)>,

    // row under the pointer (index into plot.points)
    pub hovered: Option<usize>,
}

impl PlotApp {
    pub fn new(plot: ScatterPlot) -> Self {
        let show_labels = plot.has_labels();
        Self {
            plot,
            params: DeclutterParams::default(),
            show_labels,
            show_table: false,
            layout: None,
            hovered: None,
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong(format!("{} vs {}", self.plot.y_name, self.plot.x_name));
            ui.separator();
            ui.label(format!(
                "{} point(s) from {} row(s)",
                self.plot.points.len(),
                self.plot.rows_used
            ));
            ui.separator();
            ui.add_enabled_ui(self.plot.has_labels(), |ui| {
                ui.checkbox(&mut self.show_labels, "Labels");
            });
            ui.checkbox(&mut self.show_table, "Table");
            if let Some((_, layout)) = &self.layout {
                if self.show_labels {
                    ui.separator();
                    ui.weak(format!(
                        "overlaps {} -> {}",
                        layout.overlaps_before, layout.overlaps_after
                    ));
                }
            }
        });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui);
        });

        if self.show_table {
            egui::SidePanel::right("rows")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| {
                    super::components::data_table::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::scatter::draw(ui, self);
        });
    }
}
