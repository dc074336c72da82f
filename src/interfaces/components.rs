//! Form panels and result widgets for the estimator window.

use crate::application::estimator::CostEstimate;
use crate::domain::cylinder::{ApplicationType, CushionType};
use crate::domain::features::FEATURE_COLUMNS;
use crate::domain::geometry;
use crate::interfaces::app::FormState;
use eframe::egui;
use std::ops::RangeInclusive;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(31, 119, 255);
const WARNING: egui::Color32 = egui::Color32::from_rgb(255, 200, 80);
const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 90, 90);

fn dimension_row(ui: &mut egui::Ui, label: &str, value: &mut u32, range: RangeInclusive<u32>) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::DragValue::new(value).range(range).suffix(" mm"));
        });
    });
}

pub fn render_dimensions(ui: &mut egui::Ui, form: &mut FormState) {
    ui.heading("Dimensions");
    ui.add_space(8.0);

    dimension_row(ui, "Tube OD", &mut form.tube_od, geometry::DIAMETER_RANGE_MM);
    dimension_row(ui, "Bore", &mut form.bore, geometry::DIAMETER_RANGE_MM);
    dimension_row(ui, "Rod", &mut form.rod, geometry::DIAMETER_RANGE_MM);
    dimension_row(ui, "Stroke", &mut form.stroke, geometry::STROKE_RANGE_MM);
    dimension_row(
        ui,
        "Closed Length",
        &mut form.closed_len,
        geometry::CLOSED_LEN_RANGE_MM,
    );
}

pub fn render_configuration(ui: &mut egui::Ui, form: &mut FormState) {
    ui.heading("Configuration");
    ui.add_space(8.0);

    egui::ComboBox::from_label("Application Type")
        .selected_text(form.application.as_str())
        .show_ui(ui, |ui| {
            for app in ApplicationType::ALL {
                ui.selectable_value(&mut form.application, app, app.as_str());
            }
        });

    ui.add_space(4.0);

    egui::ComboBox::from_label("Cushioning Type")
        .selected_text(form.cushion.as_str())
        .show_ui(ui, |ui| {
            for cushion in CushionType::ALL {
                ui.selectable_value(&mut form.cushion, cushion, cushion.as_str());
            }
        });
}

pub fn render_results(ui: &mut egui::Ui, estimate: &CostEstimate) {
    ui.heading("Dynamic Results");
    ui.add_space(8.0);

    if estimate.weight_suspect {
        ui.label(
            egui::RichText::new("⚠ Estimated weight is negative. Please check geometry.")
                .color(WARNING),
        );
        ui.add_space(4.0);
    }

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new("Estimated Weight (Kg)").size(14.0));
            ui.label(
                egui::RichText::new(format!("{:.2}", estimate.weight_kg))
                    .size(26.0)
                    .strong(),
            );
        });

        ui.add_space(24.0);

        match &estimate.cost {
            Ok(cost) => render_cost_card(ui, *cost),
            Err(e) => render_prediction_error(ui, &e.to_string()),
        }
    });

    ui.add_space(8.0);
    render_input_row(ui, estimate);
}

fn render_cost_card(ui: &mut egui::Ui, cost: f64) {
    egui::Frame::NONE
        .fill(ACCENT.linear_multiply(0.12))
        .stroke(egui::Stroke::new(2.0, ACCENT))
        .corner_radius(10)
        .inner_margin(egui::Margin::symmetric(20, 12))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Predicted Cost").size(16.0));
                ui.label(
                    egui::RichText::new(format!("₹ {cost:.2}"))
                        .size(25.0)
                        .strong()
                        .color(ACCENT),
                );
            });
        });
}

fn render_prediction_error(ui: &mut egui::Ui, message: &str) {
    egui::Frame::NONE
        .fill(DANGER.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.5, DANGER))
        .corner_radius(10)
        .inner_margin(egui::Margin::symmetric(20, 12))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Prediction failed.")
                        .strong()
                        .color(DANGER),
                );
                ui.label(egui::RichText::new(message).monospace().size(12.0));
            });
        });
}

fn render_input_row(ui: &mut egui::Ui, estimate: &CostEstimate) {
    egui::CollapsingHeader::new("Show model input row")
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("model_input_row")
                .striped(true)
                .show(ui, |ui| {
                    for column in FEATURE_COLUMNS {
                        ui.label(egui::RichText::new(*column).strong());
                    }
                    ui.end_row();

                    let record = &estimate.record;
                    ui.label(format!("{:.4}", record.est_wt_kg));
                    ui.label(format!("{:.0}", record.rod));
                    ui.label(format!("{:.0}", record.stroke));
                    ui.label(format!("{:.0}", record.tube_od));
                    ui.label(record.application.as_str());
                    ui.label(record.cushion.as_str());
                    ui.end_row();
                });
        });
}
