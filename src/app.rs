use eframe::egui;
use egui::{vec2, CentralPanel, Color32, TopBottomPanel};

use crate::footprint::EmissionResult;
use crate::pie_chart::{PieChart, Segment};
use crate::utils::percent;

const TRAVEL_COLOR: Color32 = Color32::from_rgb(217, 83, 60);
const ENERGY_COLOR: Color32 = Color32::from_rgb(222, 168, 32);
const DIET_COLOR: Color32 = Color32::from_rgb(62, 166, 101);

pub struct App {
    result: EmissionResult,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Your Daily Carbon Footprint");
        });
        CentralPanel::default().show(ctx, |ui| {
            ui.label(format!(
                "Total carbon emissions: {:.2} kg CO2 per day",
                self.result.grand_total
            ));
            ui.separator();

            ui.add(PieChart::new(self.segments()));

            ui.separator();
            for (label, value) in self.result.categories() {
                ui.label(format!(
                    "{}: {:.2} kg CO2 ({:.1}%)",
                    label,
                    value,
                    percent(value, self.result.grand_total)
                ));
            }
        });
    }
}

impl App {
    /// Opens the chart window; the process exits when the operator closes it.
    pub fn run(result: EmissionResult) -> ! {
        let options = eframe::NativeOptions {
            initial_window_size: Some(vec2(420.0, 480.0)),
            ..Default::default()
        };
        let app = App { result };

        eframe::run_native(
            "Your Daily Carbon Footprint",
            options,
            Box::new(|_cc| Box::new(app)),
        )
    }

    fn segments(&self) -> Vec<Segment> {
        let colors = [TRAVEL_COLOR, ENERGY_COLOR, DIET_COLOR];
        self.result
            .categories()
            .into_iter()
            .zip(colors)
            .map(|((label, value), color)| Segment {
                label,
                value,
                color,
                // The travel slice is pulled out of the pie for emphasis.
                exploded: label == "Travel",
            })
            .collect()
    }
}
