use serde::Serialize;

// ---------------------------------------------------------------------------
// CategoryId / CategoryOrder – the race axis
// ---------------------------------------------------------------------------

/// Position of a race in the [`CategoryOrder`].
///
/// Ordering of ids is the x-axis ordering, never the label's lexical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(usize);

impl CategoryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Distinct race labels in order of first appearance in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryOrder {
    labels: Vec<String>,
}

impl CategoryOrder {
    pub fn position(&self, label: &str) -> Option<CategoryId> {
        self.labels.iter().position(|l| l == label).map(CategoryId)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// WideTable – the sheet as published
// ---------------------------------------------------------------------------

/// One source row: a race label and one score per participant column.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub label: String,
    /// Same length and order as [`WideTable::participants`]. Blank cells are `NaN`.
    pub scores: Vec<f64>,
}

/// The sheet before reshaping: one row per race, one column per participant.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub participants: Vec<String>,
    pub rows: Vec<WideRow>,
}

// ---------------------------------------------------------------------------
// Observation – one fact of the long-format table
// ---------------------------------------------------------------------------

/// A single (race, participant, score) fact.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub category: CategoryId,
    pub participant: String,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// ScoreTable – the immutable long-format dataset
// ---------------------------------------------------------------------------

/// Long-format scores plus the axes they were melted from.
///
/// Observations are stored race-major (category order, then participant
/// column order), so each participant's rows are already in x-axis order.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    observations: Vec<Observation>,
    categories: CategoryOrder,
    participants: Vec<String>,
}

impl ScoreTable {
    /// Melt a wide table into one observation per (race, participant).
    ///
    /// Rows come out in first-appearance order of their label. A row whose
    /// label was already seen is dropped, so every participant has exactly one
    /// observation per race.
    pub fn reshape(wide: WideTable) -> Self {
        let mut categories = CategoryOrder::default();
        let mut observations = Vec::with_capacity(wide.rows.len() * wide.participants.len());

        for row in &wide.rows {
            if categories.position(&row.label).is_some() {
                log::warn!("Dropping repeated race '{}'", row.label);
                continue;
            }
            let id = CategoryId(categories.labels.len());
            categories.labels.push(row.label.clone());

            for (participant, &score) in wide.participants.iter().zip(&row.scores) {
                observations.push(Observation {
                    category: id,
                    participant: participant.clone(),
                    score,
                });
            }
        }

        ScoreTable {
            observations,
            categories,
            participants: wide.participants,
        }
    }

    pub fn categories(&self) -> &CategoryOrder {
        &self.categories
    }

    /// Participant names in source column order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Observations of one participant, in race order.
    pub fn observations_for<'a>(
        &'a self,
        participant: &'a str,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations
            .iter()
            .filter(move |o| o.participant == participant)
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn wide<const N: usize>(participants: &[&str], rows: &[(&str, [f64; N])]) -> WideTable {
        WideTable {
            participants: participants.iter().map(|p| p.to_string()).collect(),
            rows: rows
                .iter()
                .map(|(label, scores)| WideRow {
                    label: label.to_string(),
                    scores: scores.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn reshape_melts_race_major() {
        let table = ScoreTable::reshape(wide(
            &["Alice", "Bob"],
            &[("R1", [25.0, 18.0]), ("R2", [20.0, 22.0])],
        ));

        let facts: Vec<(&str, &str, f64)> = table
            .observations
            .iter()
            .map(|o| {
                let race = table.categories().labels()[o.category.index()].as_str();
                (race, o.participant.as_str(), o.score)
            })
            .collect();

        assert_eq!(
            facts,
            vec![
                ("R1", "Alice", 25.0),
                ("R1", "Bob", 18.0),
                ("R2", "Alice", 20.0),
                ("R2", "Bob", 22.0),
            ]
        );
    }

    #[test]
    fn reshape_yields_cross_product_without_duplicates() {
        let participants = ["Max", "Lando", "Oscar", "Charles"];
        let table = ScoreTable::reshape(WideTable {
            participants: participants.iter().map(|p| p.to_string()).collect(),
            rows: (0..7)
                .map(|i| WideRow {
                    label: format!("Race {i}"),
                    scores: vec![i as f64; participants.len()],
                })
                .collect(),
        });

        assert_eq!(table.len(), 7 * 4);
        let pairs: HashSet<(CategoryId, &str)> = table
            .observations
            .iter()
            .map(|o| (o.category, o.participant.as_str()))
            .collect();
        assert_eq!(pairs.len(), 7 * 4);
    }

    #[test]
    fn category_order_follows_first_appearance_not_sorting() {
        let table = ScoreTable::reshape(wide(
            &["Alice"],
            &[
                ("Bahrain", [30.0]),
                ("Saudi Arabia", [31.0]),
                ("Australia", [32.0]),
                ("10", [33.0]),
                ("9", [34.0]),
            ],
        ));

        assert_eq!(
            table.categories().labels(),
            &["Bahrain", "Saudi Arabia", "Australia", "10", "9"]
        );
        let scores: Vec<f64> = table.observations_for("Alice").map(|o| o.score).collect();
        assert_eq!(scores, vec![30.0, 31.0, 32.0, 33.0, 34.0]);
    }

    #[test]
    fn repeated_labels_keep_only_their_first_row() {
        let table = ScoreTable::reshape(wide(
            &["Alice"],
            &[("R1", [1.0]), ("R2", [2.0]), ("R1", [3.0])],
        ));

        assert_eq!(table.categories().labels(), &["R1", "R2"]);
        let seq: Vec<(usize, f64)> = table
            .observations
            .iter()
            .map(|o| (o.category.index(), o.score))
            .collect();
        assert_eq!(seq, vec![(0, 1.0), (1, 2.0)]);
    }

    #[test]
    fn reshape_of_empty_sheet_is_empty() {
        let table = ScoreTable::reshape(wide::<2>(&["Alice", "Bob"], &[]));
        assert!(table.is_empty());
        assert!(table.categories().is_empty());
        assert_eq!(table.participants().len(), 2);
    }

    #[test]
    fn is_participant_matches_exact_names() {
        let table = ScoreTable::reshape(wide(&["Alice"], &[("R1", [1.0])]));
        assert!(table.is_participant("Alice"));
        assert!(!table.is_participant("alice"));
    }
}
