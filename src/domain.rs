use crate::constants;
use crate::error::{Error, Result};
use crate::utils;
use num_traits::Float;
use num_traits::cast::FromPrimitive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain<F: Float> {
    pub x_min: F,
    pub x_max: F,
    pub samples: usize,
}

impl<F: Float + FromPrimitive> Domain<F> {
    pub fn new(x_min: F, x_max: F) -> Self {
        Self {
            x_min,
            x_max,
            samples: constants::DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_samples(self, samples: usize) -> Self {
        Self { samples, ..self }
    }

    pub fn fallback() -> Self {
        Self::new(
            utils::from_f64(constants::DEFAULT_X_MIN),
            utils::from_f64(constants::DEFAULT_X_MAX),
        )
    }

    pub fn validate(&self) -> Result<()> {
        // written so that NaN bounds are rejected as well
        if self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.x_min < self.x_max
            && self.samples >= constants::MIN_SAMPLE_COUNT
        {
            Ok(())
        } else {
            Err(Error::InvalidDomain {
                x_min: utils::to_f64(self.x_min),
                x_max: utils::to_f64(self.x_max),
                samples: self.samples,
            })
        }
    }

    pub fn step(&self) -> F {
        (self.x_max - self.x_min) / utils::from_usize(self.samples.saturating_sub(1).max(1))
    }

    /// Parses range text such as `"-10,10"`: two finite, ordered numbers
    /// separated by a comma.
    pub fn parse(text: &str) -> Option<Self> {
        let mut bounds = text.split(constants::RANGE_SEPARATOR).map(str::trim);
        let (x_min, x_max) = match (bounds.next(), bounds.next(), bounds.next()) {
            (Some(x_min), Some(x_max), None) => (x_min, x_max),
            _ => return None,
        };
        // checked after narrowing to F, where bounds may overflow or collapse
        let x_min: F = utils::from_f64(x_min.parse::<f64>().ok()?);
        let x_max: F = utils::from_f64(x_max.parse::<f64>().ok()?);
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return None;
        }
        Some(Self::new(x_min, x_max))
    }

    /// Like [`Domain::parse`], but substitutes [`Domain::fallback`] for text
    /// that does not describe a usable range.
    pub fn parse_or_fallback(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|| {
            log::warn!(
                "range {:?} is not usable, falling back to [{}, {}]",
                text,
                constants::DEFAULT_X_MIN,
                constants::DEFAULT_X_MAX
            );
            Self::fallback()
        })
    }
}

impl<F: Float + FromPrimitive> Default for Domain<F> {
    fn default() -> Self {
        Self::fallback()
    }
}
