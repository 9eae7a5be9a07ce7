use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HarvestCompareApp {
    pub state: AppState,
}

impl HarvestCompareApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HarvestCompareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: 2×2 comparison grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.state.comparison {
                Some(comparison) => plot::comparison_panels(ui, comparison),
                None => {
                    ui.centered_and_justified(|ui: &mut egui::Ui| {
                        ui.heading("No comparison loaded  (File → Open…)");
                    });
                }
            }
        });
    }
}
