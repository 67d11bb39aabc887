use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::config::FigureStyle;
use crate::gui::figure::PanelScene;
use crate::layout::{Bounds, Point};

/// Maps the square world window onto the largest square that fits `rect`.
///
/// World y grows upwards, screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    world: Bounds,
    square: Rect,
}

impl ScreenTransform {
    pub fn new(world: Bounds, rect: Rect) -> Self {
        let side = rect.width().min(rect.height()).max(0.0);
        Self {
            world,
            square: Rect::from_center_size(rect.center(), Vec2::splat(side)),
        }
    }

    pub fn square(&self) -> Rect {
        self.square
    }

    pub fn to_screen(&self, p: Point) -> Pos2 {
        let fx = ((p.x - self.world.min.x) / self.world.width()) as f32;
        let fy = ((p.y - self.world.min.y) / self.world.height()) as f32;
        Pos2::new(
            self.square.left() + fx * self.square.width(),
            self.square.bottom() - fy * self.square.height(),
        )
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Draw one panel: title, then edges, then nodes with their labels on top.
pub fn paint_panel(ui: &mut Ui, scene: &PanelScene, world: Bounds, style: &FigureStyle) {
    ui.vertical_centered(|ui| {
        ui.heading(scene.title);
    });

    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let transform = ScreenTransform::new(world, rect);
    let painter = ui.painter_at(rect);

    let edge_color = rgb(style.edge_color);
    for edge in &scene.edges {
        let stroke = Stroke::new(style.edge_width, edge_color.linear_multiply(edge.alpha));
        let from = transform.to_screen(edge.from);
        if edge.is_loop() {
            let ring = style.node_radius * 0.6;
            painter.circle_stroke(from - Vec2::new(0.0, style.node_radius + ring), ring, stroke);
        } else {
            painter.line_segment([from, transform.to_screen(edge.to)], stroke);
        }
    }

    let node_color = rgb(style.node_color);
    let label_color = rgb(style.label_color);
    for node in &scene.nodes {
        let center = transform.to_screen(node.pos);
        painter.circle_filled(center, style.node_radius, node_color);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &node.label,
            FontId::proportional(style.font_size),
            label_color,
        );
    }

    if scene.nodes.is_empty() {
        painter.text(
            transform.square().center(),
            Align2::CENTER_CENTER,
            "no edges",
            FontId::proportional(style.font_size),
            Color32::GRAY,
        );
    }
}
