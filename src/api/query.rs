use serde::{Deserialize, Serialize};

use crate::core::{CategoryValue, SelectionId};
use crate::error::{VisualError, VisualResult};

use super::PropertyOverrides;

/// Query result delivered by the host data-binding runtime.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub categorical: Option<CategoricalData>,
    /// Visual-level property overrides.
    #[serde(default)]
    pub objects: PropertyOverrides,
}

impl QueryResult {
    #[must_use]
    pub fn new(category: CategoryColumn, measure: MeasureColumn) -> Self {
        Self {
            categorical: Some(CategoricalData {
                categories: vec![category],
                values: vec![measure],
            }),
            objects: PropertyOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_objects(mut self, objects: PropertyOverrides) -> Self {
        self.objects = objects;
        self
    }

    pub fn from_json_str(input: &str) -> VisualResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisualError::Json(format!("failed to parse query result: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoricalData {
    #[serde(default)]
    pub categories: Vec<CategoryColumn>,
    #[serde(default)]
    pub values: Vec<MeasureColumn>,
}

/// The grouping dimension of the query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColumn {
    pub query_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub values: Vec<CategoryValue>,
    /// Host-issued per-row identities; rows past the end get derived ones.
    #[serde(default)]
    pub identities: Vec<SelectionId>,
    /// Per-row property overrides, e.g. `colorSelector.fill`.
    #[serde(default)]
    pub objects: Vec<Option<PropertyOverrides>>,
}

impl CategoryColumn {
    #[must_use]
    pub fn new<I, V>(query_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CategoryValue>,
    {
        let query_name = query_name.into();
        Self {
            display_name: query_name.clone(),
            query_name,
            values: values.into_iter().map(Into::into).collect(),
            identities: Vec::new(),
            objects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_identities(mut self, identities: Vec<SelectionId>) -> Self {
        self.identities = identities;
        self
    }

    /// Attaches overrides to `row`, growing `objects` as needed.
    #[must_use]
    pub fn with_row_objects(mut self, row: usize, objects: PropertyOverrides) -> Self {
        if self.objects.len() <= row {
            self.objects.resize(row + 1, None);
        }
        self.objects[row] = Some(objects);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identity of `row`: the host-issued one, else `[query_name, row]`.
    #[must_use]
    pub fn identity(&self, row: usize) -> SelectionId {
        self.identities
            .get(row)
            .cloned()
            .unwrap_or_else(|| SelectionId::for_row(&self.query_name, row))
    }
}

/// The numeric value series of the query result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureColumn {
    pub query_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
    /// Maximum precomputed by the host.
    #[serde(default)]
    pub maximum: Option<f64>,
    #[serde(default)]
    pub format_string: Option<String>,
}

impl MeasureColumn {
    #[must_use]
    pub fn new(query_name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let query_name = query_name.into();
        let maximum = values
            .iter()
            .flatten()
            .copied()
            .filter(|value| value.is_finite())
            .reduce(f64::max);
        Self {
            display_name: query_name.clone(),
            query_name,
            values,
            maximum,
            format_string: None,
        }
    }

    #[must_use]
    pub fn with_maximum(mut self, maximum: Option<f64>) -> Self {
        self.maximum = maximum;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
