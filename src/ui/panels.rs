use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Side};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / summary bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open Ghana CSV…").clicked() {
                open_file_dialog(state, Side::Left);
                ui.close_menu();
            }
            if ui.button("Open Ivory Coast CSV…").clicked() {
                open_file_dialog(state, Side::Right);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.strong("Ghana vs Ivory Coast Comparative Analysis of Data");
        ui.separator();

        if let Some(cmp) = &state.comparison {
            ui.label(format!(
                "{} Ghana rows, {} Ivory Coast rows, {} years",
                cmp.left.series.len(),
                cmp.right.series.len(),
                cmp.domain.years.len()
            ));

            if cmp.domain.union_fallback {
                ui.separator();
                ui.label(
                    RichText::new("No common years — showing the union of both year sets")
                        .color(Color32::YELLOW),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn open_file_dialog(state: &mut AppState, side: Side) {
    let file = rfd::FileDialog::new()
        .set_title(match side {
            Side::Left => "Open Ghana dataset",
            Side::Right => "Open Ivory Coast dataset",
        })
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.replace_file(side, path);
    }
}
