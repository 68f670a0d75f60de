use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{DashboardState, SelectionEvent};

// ---------------------------------------------------------------------------
// Left side panel – participant checklist
// ---------------------------------------------------------------------------

/// Render the participant checklist.
///
/// Checkbox clicks are collected first and dispatched after the loop, so the
/// list is drawn from one consistent selection per frame.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Participants");
    ui.separator();

    let mut events = Vec::new();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            events.push(SelectionEvent::SelectAll);
        }
        if ui.small_button("None").clicked() {
            events.push(SelectionEvent::SelectNone);
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for name in state.table().participants() {
                let mut checked = state.selection().contains(name);
                let text = RichText::new(name).color(state.colors.color_for(name));
                if ui.checkbox(&mut checked, text).changed() {
                    events.push(SelectionEvent::Toggle(name.clone()));
                }
            }
        });

    for event in events {
        state.dispatch(event);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the page heading and toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut DashboardState, heading: &str) {
    ui.heading(heading);

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} races, {} of {} participants shown",
            state.table().categories().len(),
            state.selection().len(),
            state.table().participants().len()
        ));

        ui.separator();

        if ui.button("Copy figure JSON").clicked() {
            match state.figure_json() {
                Ok(json) => {
                    ui.ctx().copy_text(json);
                    state.status_message = None;
                }
                Err(e) => {
                    log::error!("Failed to serialise figure: {e}");
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
