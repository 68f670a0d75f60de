use serde::Serialize;

use super::filter::Selection;
use super::model::{CategoryId, ScoreTable};
use crate::config::ChartConfig;

// ---------------------------------------------------------------------------
// Chart figure – derived per render, never stored in the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub category: CategoryId,
    pub score: f64,
}

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub participant: String,
    /// Exactly one point per race, in race order.
    pub points: Vec<SeriesPoint>,
}

/// Everything the plot needs to draw the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y_range: [f64; 2],
    /// Race labels indexed by [`CategoryId`].
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Build the figure for `selection`.
///
/// Series follow the table's participant column order. Names in the
/// selection that are not participants produce nothing.
pub fn build_figure(table: &ScoreTable, selection: &Selection, chart: &ChartConfig) -> ChartFigure {
    let series = table
        .participants()
        .iter()
        .filter(|p| selection.contains(p))
        .map(|participant| ChartSeries {
            participant: participant.clone(),
            points: table
                .observations_for(participant)
                .map(|o| SeriesPoint {
                    category: o.category,
                    score: o.score,
                })
                .collect(),
        })
        .collect();

    ChartFigure {
        title: chart.title.clone(),
        x_title: chart.x_title.clone(),
        y_title: chart.y_title.clone(),
        y_range: chart.y_range,
        categories: table.categories().labels().to_vec(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{WideRow, WideTable};

    fn example_table() -> ScoreTable {
        ScoreTable::reshape(WideTable {
            participants: vec!["Alice".into(), "Bob".into()],
            rows: vec![
                WideRow {
                    label: "R1".into(),
                    scores: vec![25.0, 18.0],
                },
                WideRow {
                    label: "R2".into(),
                    scores: vec![20.0, 22.0],
                },
            ],
        })
    }

    fn points(figure: &ChartFigure, idx: usize) -> Vec<(&str, f64)> {
        figure.series[idx]
            .points
            .iter()
            .map(|p| (figure.categories[p.category.index()].as_str(), p.score))
            .collect()
    }

    #[test]
    fn single_participant_selection() {
        let table = example_table();
        let sel: Selection = ["Alice"].into_iter().collect();

        let figure = build_figure(&table, &sel, &ChartConfig::default());

        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].participant, "Alice");
        assert_eq!(points(&figure, 0), vec![("R1", 25.0), ("R2", 20.0)]);
    }

    #[test]
    fn every_series_has_one_point_per_race() {
        let table = example_table();
        let figure = build_figure(&table, &Selection::all(&table), &ChartConfig::default());

        assert_eq!(figure.series.len(), 2);
        for series in &figure.series {
            assert_eq!(series.points.len(), table.categories().len());
        }
        assert_eq!(points(&figure, 1), vec![("R1", 18.0), ("R2", 22.0)]);
    }

    #[test]
    fn empty_selection_yields_no_series() {
        let table = example_table();
        let figure = build_figure(&table, &Selection::none(), &ChartConfig::default());

        assert!(figure.series.is_empty());
        assert_eq!(figure.y_range, [20.0, 70.0]);
        assert_eq!(figure.categories, vec!["R1", "R2"]);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let table = example_table();
        let sel: Selection = ["Bob", "Nobody"].into_iter().collect();

        let figure = build_figure(&table, &sel, &ChartConfig::default());

        let names: Vec<&str> = figure.series.iter().map(|s| s.participant.as_str()).collect();
        assert_eq!(names, vec!["Bob"]);
    }

    #[test]
    fn series_follow_column_order_and_layout_is_fixed() {
        let table = example_table();
        let sel: Selection = ["Bob", "Alice"].into_iter().collect();

        let figure = build_figure(&table, &sel, &ChartConfig::default());

        let names: Vec<&str> = figure.series.iter().map(|s| s.participant.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(figure.title, "Scores per race");
        assert_eq!(figure.x_title, "Race");
        assert_eq!(figure.y_title, "Score");
        assert_eq!(figure.y_range, [20.0, 70.0]);
    }

    #[test]
    fn figure_serializes_to_json() {
        let table = example_table();
        let sel: Selection = ["Alice"].into_iter().collect();
        let figure = build_figure(&table, &sel, &ChartConfig::default());

        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["title"], "Scores per race");
        assert_eq!(json["categories"], serde_json::json!(["R1", "R2"]));
        assert_eq!(json["series"][0]["participant"], "Alice");
        assert_eq!(json["series"][0]["points"][1]["category"], 1);
        assert_eq!(json["series"][0]["points"][1]["score"], 20.0);
    }
}
