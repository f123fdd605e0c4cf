//! Moody diagram rendered on log-log axes.

use crate::error::PlotResult;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};
use pf_friction::moody::{Curve, F_MAX, F_MIN, MoodyDiagram, RE_MAX, RE_MIN};
use pf_friction::{FlowRegime, PointEstimate};

/// An operating point to highlight on the diagram.
#[derive(Debug, Clone, Copy)]
pub struct MarkedPoint {
    pub reynolds: f64,
    pub friction: f64,
    pub regime: FlowRegime,
}

impl From<PointEstimate> for MarkedPoint {
    fn from(p: PointEstimate) -> Self {
        Self {
            reynolds: p.reynolds,
            friction: p.friction,
            regime: p.regime,
        }
    }
}

/// Transitional points get the upward triangle; everything else a circle.
fn marker_for(regime: FlowRegime) -> MarkerShape {
    match regime {
        FlowRegime::Transitional => MarkerShape::Up,
        _ => MarkerShape::Circle,
    }
}

/// egui_plot has no log axes, so the chart works in log10 coordinates and
/// formats tick labels back into physical values.
fn to_log_points(curve: &Curve) -> Vec<[f64; 2]> {
    curve
        .iter()
        .filter(|p| p[0] > 0.0 && p[1] > 0.0)
        .map(|p| [p[0].log10(), p[1].log10()])
        .collect()
}

pub struct MoodyView {
    diagram: MoodyDiagram,
    marked: Option<MarkedPoint>,
}

impl MoodyView {
    pub fn new(diagram: MoodyDiagram, marked: Option<MarkedPoint>) -> Self {
        Self { diagram, marked }
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        let plot = Plot::new("moody")
            .legend(Legend::default())
            .x_axis_label("Reynolds number Re")
            .y_axis_label("Friction factor f")
            .x_axis_formatter(|mark, _range| format!("{:.0e}", 10.0_f64.powf(mark.value)))
            .y_axis_formatter(|mark, _range| format!("{:.3}", 10.0_f64.powf(mark.value)))
            .label_formatter(|name, value| {
                let re = 10.0_f64.powf(value.x);
                let f = 10.0_f64.powf(value.y);
                if name.is_empty() {
                    format!("Re = {re:.3e}\nf = {f:.4}")
                } else {
                    format!("{name}\nRe = {re:.3e}\nf = {f:.4}")
                }
            })
            .include_x(RE_MIN.log10())
            .include_x(RE_MAX.log10())
            .include_y(F_MIN.log10())
            .include_y(F_MAX.log10());

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(to_log_points(&self.diagram.laminar)))
                    .color(egui::Color32::BLUE)
                    .width(1.5)
                    .name("Laminar"),
            );
            plot_ui.line(
                Line::new(PlotPoints::from(to_log_points(&self.diagram.transition)))
                    .color(egui::Color32::BLUE)
                    .style(LineStyle::Dashed { length: 8.0 })
                    .width(1.5)
                    .name("Transition"),
            );

            for curve in &self.diagram.turbulent {
                let pts = to_log_points(&curve.points);
                let end = pts.last().copied();
                plot_ui.line(Line::new(PlotPoints::from(pts)).color(egui::Color32::GRAY));
                if let Some([x, y]) = end {
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), format!("{}", curve.rel_roughness))
                            .anchor(egui::Align2::LEFT_CENTER),
                    );
                }
            }

            if let Some(pt) = self.marked {
                plot_ui.points(
                    Points::new(vec![[pt.reynolds.log10(), pt.friction.log10()]])
                        .shape(marker_for(pt.regime))
                        .radius(7.0)
                        .filled(false)
                        .color(egui::Color32::RED)
                        .name("Operating point"),
                );
            }
        });
    }
}

struct MoodyApp {
    view: MoodyView,
}

impl eframe::App for MoodyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.ui(ui);
        });
    }
}

/// Open a blocking window showing the Moody diagram, optionally with one
/// operating point marked.
pub fn show_moody(diagram: MoodyDiagram, marked: Option<MarkedPoint>) -> PlotResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([980.0, 680.0]),
        ..Default::default()
    };
    let view = MoodyView::new(diagram, marked);
    eframe::run_native(
        "Moody diagram",
        options,
        Box::new(move |_cc| Ok(Box::new(MoodyApp { view }))),
    )?;
    Ok(())
}
