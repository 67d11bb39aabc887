use eframe::egui;
use egui::{CentralPanel, CollapsingHeader, Context, Separator, SidePanel, Ui};

use crate::config::FigureStyle;
use crate::error::VisualizerResult;
use crate::gui::edge_table::{self, EdgeRow};
use crate::gui::figure::Figure;
use crate::gui::panel::paint_panel;
use crate::layout::LayoutKind;

const WINDOW_TITLE: &str = "Knowledge Source Network";
const WINDOW_SIZE: [f32; 2] = [1200.0, 600.0];

/// Open the figure window and block until it is closed.
pub fn run(
    figure: Figure,
    rows: Vec<EdgeRow>,
    layout: LayoutKind,
    style: FigureStyle,
) -> VisualizerResult<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    let app = App {
        figure,
        rows,
        layout,
        style,
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::LATTE);
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )?;
    Ok(())
}

struct App {
    figure: Figure,
    rows: Vec<EdgeRow>,
    layout: LayoutKind,
    style: FigureStyle,
}

impl App {
    fn render_side_panel(&self, ui: &mut Ui) {
        ui.label(format!("Layout: {}", self.layout));
        ui.label(format!(
            "(a) {} nodes, {} edges",
            self.figure.pre.nodes.len(),
            self.figure.pre.edges.len()
        ));
        ui.label(format!(
            "(b) {} nodes, {} edges",
            self.figure.post.nodes.len(),
            self.figure.post.edges.len()
        ));

        ui.add(Separator::default());

        CollapsingHeader::new("Edges")
            .default_open(true)
            .show(ui, |ui| {
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    edge_table::show(ui, &self.rows);
                });
            });
    }

    fn render(&self, ctx: &Context) {
        SidePanel::right("edge_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| self.render_side_panel(ui));

        CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                for (column, scene) in columns.iter_mut().zip(self.figure.panels()) {
                    paint_panel(column, scene, self.figure.world, &self.style);
                }
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.render(ctx);
    }
}
