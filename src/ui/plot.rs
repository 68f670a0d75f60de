use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

use crate::data::series::ChartSeries;
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Score chart (central panel)
// ---------------------------------------------------------------------------

/// Render the score chart in the central panel.
///
/// Races sit at x = 0, 1, 2, … and are labelled with their names; the y-axis
/// is pinned to the figure's range every frame.
pub fn score_plot(ui: &mut Ui, state: &DashboardState) {
    let figure = state.figure();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(figure.title.as_str());
    });

    if state.table().categories().is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No races in the score sheet yet");
        });
        return;
    }

    if state.selection().is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak("Tick a participant to plot their scores");
        });
    }

    let x_labels = figure.categories.clone();
    let hover_labels = figure.categories.clone();
    let [y_min, y_max] = figure.y_range;
    let x_max = (figure.categories.len() - 1) as f64;

    Plot::new("score_plot")
        .legend(Legend::default())
        .x_axis_label(figure.x_title.as_str())
        .y_axis_label(figure.y_title.as_str())
        .x_axis_formatter(move |mark: GridMark, _range| category_tick(&x_labels, mark.value))
        .label_formatter(move |name, point: &PlotPoint| {
            let race = category_tick(&hover_labels, point.x.round());
            if name.is_empty() {
                format!("{race}\n{:.0}", point.y)
            } else {
                format!("{name}\n{race}: {:.0}", point.y)
            }
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-0.5, y_min],
                [x_max + 0.5, y_max],
            ));

            for series in &figure.series {
                let color = state.colors.color_for(&series.participant);
                let line = Line::new(series_points(series))
                    .name(&series.participant)
                    .color(color)
                    .width(2.0);

                plot_ui.line(line);
            }
        });
}

/// Label of the race at integer position `x`, blank between races.
fn category_tick(labels: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

/// Missing scores are skipped, joining the races either side of them.
fn series_points(series: &ChartSeries) -> PlotPoints<'_> {
    series
        .points
        .iter()
        .filter(|p| p.score.is_finite())
        .map(|p| [p.category.index() as f64, p.score])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_label_whole_positions_inside_the_axis() {
        let labels = vec!["Bahrain".to_string(), "Jeddah".to_string()];
        assert_eq!(category_tick(&labels, 0.0), "Bahrain");
        assert_eq!(category_tick(&labels, 1.0), "Jeddah");
        assert_eq!(category_tick(&labels, 0.5), "");
        assert_eq!(category_tick(&labels, -1.0), "");
        assert_eq!(category_tick(&labels, 2.0), "");
    }
}
