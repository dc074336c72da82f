use crate::application::estimator::{CostEstimate, CostEstimator};
use crate::domain::cylinder::{ApplicationType, CushionType, CylinderSelection};
use crate::domain::geometry::GeometryInput;
use crate::interfaces::components;
use eframe::egui;

/// Raw form state in integer millimetres. The widgets clamp each field to
/// its documented range, so the facade only ever sees in-range values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub tube_od: u32,
    pub bore: u32,
    pub rod: u32,
    pub stroke: u32,
    pub closed_len: u32,
    pub application: ApplicationType,
    pub cushion: CushionType,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            tube_od: 70,
            bore: 60,
            rod: 35,
            stroke: 400,
            closed_len: 650,
            application: ApplicationType::Arm,
            cushion: CushionType::Nc,
        }
    }
}

impl FormState {
    fn geometry(&self) -> GeometryInput {
        GeometryInput {
            tube_od_mm: f64::from(self.tube_od),
            bore_mm: f64::from(self.bore),
            rod_mm: f64::from(self.rod),
            stroke_mm: f64::from(self.stroke),
            closed_len_mm: f64::from(self.closed_len),
        }
    }

    fn selection(&self) -> CylinderSelection {
        CylinderSelection {
            application: self.application,
            cushion: self.cushion,
        }
    }
}

pub struct EstimatorApp {
    estimator: CostEstimator,
    form: FormState,
    // Last computed estimate together with the inputs that produced it,
    // so the predictor is invoked once per interaction rather than per frame.
    last: Option<(FormState, CostEstimate)>,
}

impl EstimatorApp {
    pub fn new(estimator: CostEstimator) -> Self {
        Self {
            estimator,
            form: FormState::default(),
            last: None,
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Cylinder Cost Estimator for Mini Excavators");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.estimator.model_label())
                            .small()
                            .weak(),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Enter Cylinder Technical Parameters");
            ui.add_space(12.0);

            ui.columns(2, |cols| {
                components::render_dimensions(&mut cols[0], &mut self.form);
                components::render_configuration(&mut cols[1], &mut self.form);
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            let stale = match &self.last {
                Some((inputs, _)) => *inputs != self.form,
                None => true,
            };
            if stale {
                let estimate = self
                    .estimator
                    .estimate(&self.form.geometry(), &self.form.selection());
                self.last = Some((self.form.clone(), estimate));
            }

            if let Some((_, estimate)) = &self.last {
                components::render_results(ui, estimate);
            }
        });
    }
}
