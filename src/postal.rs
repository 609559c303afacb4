//! Postal-code lookup table.
//!
//! The table is a YAML mapping of postal code to address metadata. Only the
//! keys matter here; they form the sampling universe for the generator.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::FixtureError;

/// Default file name of the lookup table inside the store directory.
pub const POSTAL_TABLE_FILE: &str = "postal_dict.yaml";

/// Immutable set of candidate postal codes, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCodePool {
    codes: Vec<String>,
}

impl PostalCodePool {
    /// Builds a pool from already known codes, dropping duplicates.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let codes = codes
            .into_iter()
            .map(|code| -> String { code.into() })
            .filter(|code| seen.insert(code.clone()))
            .collect();

        Self { codes }
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path).map_err(|source| FixtureError::PoolRead {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::from_yaml(&contents, path)?;
        tracing::info!(path = %path.display(), codes = pool.len(), "loaded postal-code pool");

        Ok(pool)
    }

    /// Parses the lookup table. `origin` is only used in error messages.
    pub fn from_yaml(contents: &str, origin: &Path) -> Result<Self, FixtureError> {
        let value: Value = serde_yaml::from_str(contents).map_err(|source| FixtureError::PoolFormat {
            path: origin.to_path_buf(),
            source,
        })?;

        let Value::Mapping(mapping) = value else {
            return Err(FixtureError::PoolNotMapping(origin.to_path_buf()));
        };

        Ok(Self::from_codes(mapping.keys().filter_map(postal_key)))
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Checks the pool can serve `num_jobs` jobs, two distinct codes each
    /// when `pairs` is set.
    pub fn ensure_capacity(&self, num_jobs: usize, pairs: bool) -> Result<(), FixtureError> {
        let required = if pairs { num_jobs.max(2) } else { num_jobs };
        if self.len() < required {
            return Err(FixtureError::InsufficientPool {
                available: self.len(),
                required,
            });
        }

        Ok(())
    }
}

/// String and integer keys are postal codes; anything else (nulls,
/// placeholders, floats) is skipped.
fn postal_key(key: &Value) -> Option<String> {
    match key {
        Value::String(code) => Some(code.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some(number.to_string()),
        _ => None,
    }
}
