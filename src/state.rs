use crate::color::ColorMap;
use crate::config::ChartConfig;
use crate::data::filter::Selection;
use crate::data::model::ScoreTable;
use crate::data::series::{build_figure, ChartFigure};

// ---------------------------------------------------------------------------
// Selection events
// ---------------------------------------------------------------------------

/// Everything the checklist can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Toggle(String),
    SelectAll,
    SelectNone,
    Replace(Selection),
}

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The table is loaded before the state exists and never changes; the
/// selection is the only thing events mutate, and the figure is rebuilt from
/// both after every event.
pub struct DashboardState {
    table: ScoreTable,
    chart: ChartConfig,
    selection: Selection,
    figure: ChartFigure,
    pub colors: ColorMap,
    /// Transient message shown in the top bar.
    pub status_message: Option<String>,
}

impl DashboardState {
    /// Start with every participant selected.
    pub fn new(table: ScoreTable, chart: ChartConfig) -> Self {
        let selection = Selection::all(&table);
        let figure = build_figure(&table, &selection, &chart);
        let colors = ColorMap::new(table.participants());

        Self {
            table,
            chart,
            selection,
            figure,
            colors,
            status_message: None,
        }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn figure(&self) -> &ChartFigure {
        &self.figure
    }

    /// Apply one checklist event and redraw.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let next = match event {
            SelectionEvent::Toggle(name) => {
                let mut next = self.selection.clone();
                next.toggle(&name);
                next
            }
            SelectionEvent::SelectAll => Selection::all(&self.table),
            SelectionEvent::SelectNone => Selection::none(),
            SelectionEvent::Replace(selection) => selection,
        };
        self.on_selection_changed(next);
    }

    /// Store the new selection and rebuild the figure from it.
    ///
    /// Names outside the table are dropped; an empty selection draws an
    /// empty chart.
    pub fn on_selection_changed(&mut self, mut selection: Selection) {
        let dropped = selection.retain_known(&self.table);
        if !dropped.is_empty() {
            log::debug!("Ignoring unknown participants {dropped:?}");
        }

        log::debug!(
            "Rendering {} of {} participants",
            selection.len(),
            self.table.participants().len()
        );
        self.figure = build_figure(&self.table, &selection, &self.chart);
        self.selection = selection;
        log::debug!("Idle with {} series", self.figure.series.len());
    }

    /// Serialise the current figure for the clipboard.
    pub fn figure_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.figure)
    }
}
