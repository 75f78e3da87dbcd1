//! Raw survey rows prior to normalization

use std::fmt;

use rustc_hash::FxHashMap;

use crate::survey::SurveyField;

/// A single cell as delivered by the data source
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Already numeric
    Number(f64),
    /// Numeric string, possibly padded or malformed
    Text(String),
}

impl RawValue {
    /// Coerce to a number; empty or unparsable text becomes NaN
    #[must_use]
    pub fn coerce(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    f64::NAN
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of the survey table keyed by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    values: FxHashMap<SurveyField, RawValue>,
}

impl RawRow {
    /// Create an empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from column name / value pairs, skipping unknown columns
    pub fn from_columns<I, K, V>(columns: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut row = Self::new();
        for (name, value) in columns {
            match SurveyField::from_column(name.as_ref()) {
                Some(field) => row.insert(field, value),
                None => log::trace!("Ignoring survey column {}", name.as_ref()),
            }
        }
        row
    }

    /// Set a cell
    pub fn insert(&mut self, field: SurveyField, value: impl Into<RawValue>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style variant of `insert`
    #[must_use]
    pub fn with(mut self, field: SurveyField, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Drop a cell
    pub fn remove(&mut self, field: SurveyField) -> Option<RawValue> {
        self.values.remove(&field)
    }

    /// Get a cell
    #[must_use]
    pub fn get(&self, field: SurveyField) -> Option<&RawValue> {
        self.values.get(&field)
    }

    /// Number of populated cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no populated cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
