use eframe::egui::{Color32, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::data::model::YearSeries;
use crate::data::prepare::Comparison;

// ---------------------------------------------------------------------------
// Four-panel comparison figure (central panel)
// ---------------------------------------------------------------------------

// Fixed panel colours, matching the original figure.
const MAGENTA: Color32 = Color32::from_rgb(255, 0, 255);
const CYAN: Color32 = Color32::from_rgb(0, 255, 255);
const GREEN: Color32 = Color32::from_rgb(0, 128, 0);
const BLUE: Color32 = Color32::from_rgb(0, 0, 255);

/// Render the 2×2 comparison grid: scatter panels on top, bars below.
pub fn comparison_panels(ui: &mut Ui, comparison: &Comparison) {
    let spacing = ui.spacing().item_spacing;
    let panel = Vec2::new(
        (ui.available_width() - spacing.x) / 2.0,
        (ui.available_height() - 2.0 * (spacing.y + title_height(ui))) / 2.0,
    );

    let left = &comparison.left.series;
    let right = &comparison.right.series;

    ui.horizontal(|ui| {
        scatter_panel(ui, "ghana_scatter", "Ghana — Yield by Year", left, MAGENTA, panel);
        scatter_panel(
            ui,
            "ivory_scatter",
            "Ivory Coast — Yield by Year",
            right,
            CYAN,
            panel,
        );
    });
    ui.horizontal(|ui| {
        bar_panel(ui, "ghana_bars", "Ghana — Area Harvested by Year", left, GREEN, panel);
        bar_panel(
            ui,
            "ivory_bars",
            "Ivory Coast — Area Harvested by Year",
            right,
            BLUE,
            panel,
        );
    });
}

fn title_height(ui: &Ui) -> f32 {
    ui.text_style_height(&eframe::egui::TextStyle::Heading)
}

fn scatter_panel(
    ui: &mut Ui,
    id: &str,
    title: &str,
    series: &YearSeries,
    color: Color32,
    size: Vec2,
) {
    ui.vertical(|ui| {
        ui.set_width(size.x);
        ui.vertical_centered(|ui| ui.strong(title));

        let points: PlotPoints = series
            .points
            .iter()
            .map(|&(year, value)| [year as f64, value])
            .collect();

        Plot::new(id)
            .width(size.x)
            .height(size.y)
            .x_axis_label("Year")
            .y_axis_label("Yield")
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .name(&series.name)
                        .color(color)
                        .radius(4.0),
                );
            });
    });
}

fn bar_panel(
    ui: &mut Ui,
    id: &str,
    title: &str,
    series: &YearSeries,
    color: Color32,
    size: Vec2,
) {
    ui.vertical(|ui| {
        ui.set_width(size.x);
        ui.vertical_centered(|ui| ui.strong(title));

        let bars: Vec<Bar> = series
            .points
            .iter()
            .map(|&(year, value)| {
                Bar::new(year as f64, value)
                    .width(0.8)
                    .fill(color)
                    .stroke(Stroke::new(1.0, Color32::BLACK))
            })
            .collect();

        Plot::new(id)
            .width(size.x)
            .height(size.y)
            .x_axis_label("Year")
            .y_axis_label("Area Harvested (units)")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(&series.name));
            });
    });
}
