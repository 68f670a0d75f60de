use crate::data::loader::DataSource;

/// Published export of the 2024 prediction sheet.
pub const SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR2hITWj8waraEYGbH-iYCfiCkUXxUlKtRuQYrmAwAfk07bCh60ghIS4nzgZuQLxWbYzbxVaYr4MBYt/pub?output=csv&gid=637972155";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed settings of the viewer. There are no flags or config files; these
/// defaults are the whole configuration surface.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub window_title: String,
    pub heading: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub chart: ChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::parse(SHEET_URL),
            window_title: "F1 Voorspellingen 2024".to_string(),
            heading: "Standings F1-predictions 2024".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
            chart: ChartConfig::default(),
        }
    }
}

/// Layout of the score chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Pinned y-axis domain, independent of the selection.
    pub y_range: [f64; 2],
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Scores per race".to_string(),
            x_title: "Race".to_string(),
            y_title: "Score".to_string(),
            y_range: [20.0, 70.0],
        }
    }
}
