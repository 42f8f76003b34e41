use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, SelectionSet};

/// Visual weight of a rendered point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Emphasis {
    /// Point is covered by the active selection.
    Full,
    /// A selection is active and does not cover the point.
    Dimmed,
    /// No selection is active.
    #[default]
    Neutral,
}

/// Emphasis per point, aligned with `ViewModel::data_points` by index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmphasisMap {
    levels: Vec<Emphasis>,
}

impl EmphasisMap {
    #[must_use]
    pub fn neutral(len: usize) -> Self {
        Self {
            levels: vec![Emphasis::Neutral; len],
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Emphasis> {
        self.levels.get(index).copied()
    }

    #[must_use]
    pub fn levels(&self) -> &[Emphasis] {
        &self.levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn count(&self, level: Emphasis) -> usize {
        self.levels.iter().filter(|&&l| l == level).count()
    }
}

/// Emphasis of every point against a confirmed `selection`.
///
/// An empty selection leaves every point neutral; otherwise points covered
/// by any selected token are full and the rest dimmed.
#[must_use]
pub fn compute_emphasis(points: &[DataPoint], selection: &SelectionSet) -> EmphasisMap {
    if selection.is_empty() {
        return EmphasisMap::neutral(points.len());
    }
    let levels = points
        .iter()
        .map(|point| {
            if selection.contains_point(&point.identity) {
                Emphasis::Full
            } else {
                Emphasis::Dimmed
            }
        })
        .collect();
    EmphasisMap { levels }
}

/// Like `compute_emphasis`, but an absent selection keeps `previous`.
#[must_use]
pub fn sync_emphasis(
    points: &[DataPoint],
    selection: Option<&SelectionSet>,
    previous: &EmphasisMap,
) -> EmphasisMap {
    match selection {
        Some(selection) => compute_emphasis(points, selection),
        None => previous.clone(),
    }
}
