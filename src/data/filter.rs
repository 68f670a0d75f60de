use std::collections::BTreeSet;

use super::model::ScoreTable;

// ---------------------------------------------------------------------------
// Selection – which participants are plotted
// ---------------------------------------------------------------------------

/// The participants ticked in the checklist.
///
/// May hold names that are not in the table; those are dropped when the
/// figure is built rather than rejected here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Every participant in the table, the state the viewer opens with.
    pub fn all(table: &ScoreTable) -> Self {
        table.participants().iter().cloned().collect()
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flip a single name in or out.
    pub fn toggle(&mut self, name: &str) {
        if !self.names.remove(name) {
            self.names.insert(name.to_string());
        }
    }

    /// Drop names that are not participants of `table`, returning what was dropped.
    pub fn retain_known(&mut self, table: &ScoreTable) -> Vec<String> {
        let unknown: Vec<String> = self
            .names
            .iter()
            .filter(|n| !table.is_participant(n))
            .cloned()
            .collect();
        for name in &unknown {
            self.names.remove(name);
        }
        unknown
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Selection {
            names: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
