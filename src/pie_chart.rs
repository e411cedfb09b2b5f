use std::f32::consts::TAU;

use egui::{pos2, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2, Widget};

pub struct Segment {
    pub label: &'static str,
    pub value: f64,
    pub color: Color32,
    pub exploded: bool,
}

pub struct PieChart {
    segments: Vec<Segment>,
}

impl PieChart {
    pub fn new(segments: Vec<Segment>) -> Self {
        PieChart { segments }
    }
}

impl Widget for PieChart {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = Vec2::new(256.0, 256.0);

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let center = rect.center();
        let radius = 0.4 * rect.height();
        let total: f64 = self.segments.iter().map(|s| s.value).sum();

        if total <= 0.0 {
            ui.painter()
                .circle_filled(center, radius, Color32::from_rgb(125, 125, 125));
            return response;
        }

        // Twelve o'clock, sweeping clockwise.
        let mut angle = -TAU / 4.0;
        for segment in &self.segments {
            let fraction = (segment.value / total) as f32;
            let sweep = fraction * TAU;
            if sweep <= 0.0 {
                continue;
            }

            let mid = angle + sweep / 2.0;
            let center = if segment.exploded {
                center + 0.1 * radius * Vec2::new(mid.cos(), mid.sin())
            } else {
                center
            };

            // One triangle per step, so every painted shape stays convex.
            let steps = (sweep / 0.05).ceil().max(1.0) as usize;
            let step = sweep / steps as f32;
            for i in 0..steps {
                let from = angle + step * i as f32;
                let points = vec![
                    center,
                    arc_point(center, radius, from),
                    arc_point(center, radius, from + step),
                ];
                ui.painter()
                    .add(Shape::convex_polygon(points, segment.color, Stroke::none()));
            }

            ui.painter().text(
                arc_point(center, 0.62 * radius, mid),
                Align2::CENTER_CENTER,
                format!("{}\n{:.1}%", segment.label, fraction * 100.0),
                FontId::proportional(13.0),
                Color32::WHITE,
            );

            angle += sweep;
        }

        response
    }
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    pos2(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
