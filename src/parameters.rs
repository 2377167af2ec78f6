use crate::error::{Error, Result};
use crate::family::FunctionFamily;
use crate::utils;
use num_traits::Float;
use num_traits::cast::FromPrimitive;
use std::collections::BTreeMap;

/// Parameter values by name. May hold more names than a family reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet<F: Float> {
    values: BTreeMap<String, F>,
}

impl<F: Float> Default for ParameterSet<F> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<F: Float + FromPrimitive> ParameterSet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults(family: FunctionFamily) -> Self {
        family
            .defaults()
            .iter()
            .map(|(name, value)| (*name, utils::from_f64::<F>(*value)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<F> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// returns the previous value
    pub fn set(&mut self, name: impl Into<String>, value: F) -> Option<F> {
        self.values.insert(name.into(), value)
    }

    /// Parses an edit field's text. On failure the previous value is kept.
    pub fn set_from_text(&mut self, name: &str, text: &str) -> Result<F> {
        let value = text
            .trim()
            .parse::<f64>()
            .map(utils::from_f64::<F>)
            .map_err(|_| Error::InvalidParameterValue {
                name: name.to_string(),
                text: text.to_string(),
            })?;
        self.set(name, value);
        Ok(value)
    }

    pub fn require(&self, family: FunctionFamily, name: &str) -> Result<F> {
        self.get(name).ok_or_else(|| Error::MissingParameter {
            family,
            name: name.to_string(),
        })
    }

    /// first parameter of `family` that is not set
    pub fn missing(&self, family: FunctionFamily) -> Option<&'static str> {
        family.parameter_names().find(|name| !self.contains(name))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, F)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<F: Float, S: Into<String>> FromIterator<(S, F)> for ParameterSet<F> {
    fn from_iter<I: IntoIterator<Item = (S, F)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
