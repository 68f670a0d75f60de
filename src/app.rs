use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::model::ScoreTable;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StandingsApp {
    pub state: DashboardState,
    heading: String,
}

impl StandingsApp {
    pub fn new(table: ScoreTable, config: DashboardConfig) -> Self {
        Self {
            state: DashboardState::new(table, config.chart),
            heading: config.heading,
        }
    }
}

impl eframe::App for StandingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: heading + toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.heading);
        });

        // ---- Left side panel: participant checklist ----
        egui::SidePanel::left("participant_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::score_plot(ui, &self.state);
        });
    }
}
