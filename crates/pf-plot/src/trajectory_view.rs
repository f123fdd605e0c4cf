//! Piston trajectory rendered as two stacked time charts.

use crate::error::PlotResult;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use pf_sim::PistonTrajectory;

fn series(t: &[f64], y: &[f64]) -> PlotPoints {
    let points: Vec<[f64; 2]> = t.iter().zip(y.iter()).map(|(&t, &y)| [t, y]).collect();
    points.into()
}

pub struct TrajectoryView {
    traj: PistonTrajectory,
}

impl TrajectoryView {
    pub fn new(traj: PistonTrajectory) -> Self {
        Self { traj }
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        let half = ui.available_height() / 2.0 - 8.0;

        ui.label("Piston velocity vs time");
        Plot::new("velocity")
            .legend(Legend::default())
            .height(half)
            .x_axis_label("Time (s)")
            .y_axis_label("Velocity (m/s)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series(&self.traj.t, &self.traj.velocity))
                        .color(egui::Color32::BLUE)
                        .name("velocity"),
                );
            });

        ui.label("Chamber pressures vs time");
        Plot::new("pressures")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Pressure (Pa)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series(&self.traj.t, &self.traj.p_head))
                        .color(egui::Color32::BLUE)
                        .name("head side"),
                );
                plot_ui.line(
                    Line::new(series(&self.traj.t, &self.traj.p_rod))
                        .color(egui::Color32::RED)
                        .name("rod side"),
                );
            });
    }
}

struct TrajectoryApp {
    view: TrajectoryView,
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.ui(ui);
        });
    }
}

/// Open a blocking window showing the piston response.
pub fn show_trajectory(traj: PistonTrajectory) -> PlotResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 720.0]),
        ..Default::default()
    };
    let view = TrajectoryView::new(traj);
    eframe::run_native(
        "Piston response",
        options,
        Box::new(move |_cc| Ok(Box::new(TrajectoryApp { view }))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_pairs_time_with_values() {
        let pts = series(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]);
        let v = pts.points();
        assert_eq!(v.len(), 3);
        assert_eq!(v[1].x, 1.0);
        assert_eq!(v[1].y, 6.0);
    }
}
