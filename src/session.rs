use crate::constants;
use crate::domain::Domain;
use crate::error::Result;
use crate::family::FunctionFamily;
use crate::parameters::ParameterSet;
use crate::sampler::{self, Sample};

/// State behind one plotting view: the selected family, its editable
/// parameter fields and the raw range field. Rendering is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSession {
    family: FunctionFamily,
    parameters: ParameterSet<f64>,
    range_text: String,
    samples: usize,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(constants::INIT_FAMILY)
    }
}

impl PlotSession {
    pub fn new(family: FunctionFamily) -> Self {
        Self {
            family,
            parameters: family.default_parameters(),
            range_text: String::new(),
            samples: constants::DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn family(&self) -> FunctionFamily {
        self.family
    }

    pub fn title(&self) -> &'static str {
        self.family.name()
    }

    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        (constants::X_AXIS_LABEL, constants::Y_AXIS_LABEL)
    }

    pub fn parameters(&self) -> &ParameterSet<f64> {
        &self.parameters
    }

    /// Switching family discards edits and starts from the new family's defaults.
    pub fn select_family(&mut self, family: FunctionFamily) {
        log::debug!("selected {} (was {})", family, self.family);
        self.family = family;
        self.reset_parameters();
    }

    pub fn reset_parameters(&mut self) {
        self.parameters = self.family.default_parameters();
    }

    pub fn set_parameter(&mut self, name: &str, value: f64) {
        self.parameters.set(name, value);
    }

    pub fn set_parameter_text(&mut self, name: &str, text: &str) -> Result<f64> {
        let value = self.parameters.set_from_text(name, text)?;
        log::debug!("{} parameter {} = {}", self.family, name, value);
        Ok(value)
    }

    pub fn range_text(&self) -> &str {
        &self.range_text
    }

    pub fn set_range_text(&mut self, text: impl Into<String>) {
        self.range_text = text.into();
    }

    pub fn sample_count(&self) -> usize {
        self.samples
    }

    pub fn set_sample_count(&mut self, samples: usize) {
        self.samples = samples;
    }

    pub fn domain(&self) -> Domain<f64> {
        Domain::parse_or_fallback(&self.range_text).with_samples(self.samples)
    }

    pub fn replot(&self) -> Result<Sample<f64>> {
        sampler::sample(self.family, &self.parameters, &self.domain())
    }
}
