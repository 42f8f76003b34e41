use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Host-issued identity of one source row.
///
/// Identities are hierarchical paths. A shorter path stands for every row
/// underneath it, so a selection holding `["Sales.Region"]` covers
/// `["Sales.Region", "3"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId {
    segments: SmallVec<[String; 2]>,
}

impl SelectionId {
    #[must_use]
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Identity the host would mint for row `row` of the column `query_name`.
    #[must_use]
    pub fn for_row(query_name: &str, row: usize) -> Self {
        Self::new([query_name.to_owned(), row.to_string()])
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` when `self` covers `other`: `self` is a prefix of `other`.
    ///
    /// An empty identity covers nothing.
    #[must_use]
    pub fn includes(&self, other: &SelectionId) -> bool {
        !self.segments.is_empty()
            && self.segments.len() <= other.segments.len()
            && self
                .segments
                .iter()
                .zip(other.segments.iter())
                .all(|(lhs, rhs)| lhs == rhs)
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Set of selected identities owned by the selection authority.
///
/// Insertion order is kept so confirmations serialize deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: IndexSet<SelectionId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(id: SelectionId) -> Self {
        let mut ids = IndexSet::with_capacity(1);
        ids.insert(id);
        Self { ids }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionId> {
        self.ids.iter()
    }

    /// Returns `true` when any stored token includes the point identity `id`.
    #[must_use]
    pub fn contains_point(&self, id: &SelectionId) -> bool {
        self.ids.iter().any(|token| token.includes(id))
    }

    /// Returns a copy with `id` removed when present, otherwise appended.
    #[must_use]
    pub fn toggled(&self, id: &SelectionId) -> Self {
        let mut ids = self.ids.clone();
        if !ids.shift_remove(id) {
            ids.insert(id.clone());
        }
        Self { ids }
    }
}

impl FromIterator<SelectionId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = SelectionId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a SelectionId;
    type IntoIter = indexmap::set::Iter<'a, SelectionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
