/// Data layer: loading, reshaping, selection and chart series.
///
/// Architecture:
/// ```text
///  published CSV (URL or path)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → WideTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ScoreTable  │  melt wide → long, race order by first appearance
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  series   │  selection → ChartFigure
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod series;
