use crate::error::{Error, Result};
use crate::parameters::ParameterSet;
use num_traits::Float;
use num_traits::cast::FromPrimitive;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, variant_count::VariantCount)]
pub enum FunctionFamily {
    Linear,
    Quadratic,
    Sine,
    Cosine,
    Exponential,
    Logarithmic,
    AbsLogarithmic,
}

impl FunctionFamily {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::Linear,
        Self::Quadratic,
        Self::Sine,
        Self::Cosine,
        Self::Exponential,
        Self::Logarithmic,
        Self::AbsLogarithmic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FunctionFamily::Linear => "Linear",
            FunctionFamily::Quadratic => "Quadratic",
            FunctionFamily::Sine => "Sine",
            FunctionFamily::Cosine => "Cosine",
            FunctionFamily::Exponential => "Exponential",
            FunctionFamily::Logarithmic => "Logarithmic",
            FunctionFamily::AbsLogarithmic => "Logarithmic (absolute)",
        }
    }

    /// short identifier accepted on the command line
    pub fn key(&self) -> &'static str {
        match self {
            FunctionFamily::Linear => "linear",
            FunctionFamily::Quadratic => "quadratic",
            FunctionFamily::Sine => "sine",
            FunctionFamily::Cosine => "cosine",
            FunctionFamily::Exponential => "exponential",
            FunctionFamily::Logarithmic => "logarithmic",
            FunctionFamily::AbsLogarithmic => "abs-logarithmic",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            FunctionFamily::Linear => "a*x + b",
            FunctionFamily::Quadratic => "a*x^2 + b*x + c",
            FunctionFamily::Sine => "a*sin(b*x + c)",
            FunctionFamily::Cosine => "a*cos(b*x + c)",
            FunctionFamily::Exponential => "a*exp(b*x)",
            FunctionFamily::Logarithmic => "a*ln(x) + b",
            FunctionFamily::AbsLogarithmic => "a*ln(|x|) + b",
        }
    }

    /// Declared parameters with their defaults, in evaluation order.
    pub fn defaults(&self) -> &'static [(&'static str, f64)] {
        match self {
            FunctionFamily::Linear
            | FunctionFamily::Logarithmic
            | FunctionFamily::AbsLogarithmic => &[("a", 1.0), ("b", 0.0)],
            FunctionFamily::Exponential => &[("a", 1.0), ("b", 1.0)],
            FunctionFamily::Quadratic => &[("a", 1.0), ("b", 0.0), ("c", 0.0)],
            FunctionFamily::Sine | FunctionFamily::Cosine => &[("a", 1.0), ("b", 1.0), ("c", 0.0)],
        }
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> {
        self.defaults().iter().map(|(name, _)| *name)
    }

    pub fn default_parameters<F: Float + FromPrimitive>(&self) -> ParameterSet<F> {
        ParameterSet::defaults(*self)
    }

    /// Resolves the parameters once and returns the evaluator for this family.
    ///
    /// Fails with [`Error::MissingParameter`] for the first declared parameter
    /// that `parameters` does not contain. Values outside a family's
    /// mathematical domain are not checked: `ln` of zero gives negative
    /// infinity, `ln` of a negative number gives NaN and `exp` may overflow to
    /// infinity.
    pub fn evaluator<F: Float + FromPrimitive>(
        &self,
        parameters: &ParameterSet<F>,
    ) -> Result<impl Fn(F) -> F + use<F>> {
        let family = *self;
        let coefficients = self.coefficients(parameters)?;
        Ok(move |x| family.apply(x, coefficients))
    }

    pub fn evaluate<F: Float + FromPrimitive>(&self, x: F, parameters: &ParameterSet<F>) -> Result<F> {
        let coefficients = self.coefficients(parameters)?;
        Ok(self.apply(x, coefficients))
    }

    fn coefficients<F: Float + FromPrimitive>(&self, parameters: &ParameterSet<F>) -> Result<[F; 3]> {
        let mut coefficients = [F::zero(); 3];
        for (coefficient, name) in coefficients.iter_mut().zip(self.parameter_names()) {
            *coefficient = parameters.require(*self, name)?;
        }
        Ok(coefficients)
    }

    fn apply<F: Float>(&self, x: F, [a, b, c]: [F; 3]) -> F {
        match self {
            FunctionFamily::Linear => a * x + b,
            FunctionFamily::Quadratic => a * x.powi(2) + b * x + c,
            FunctionFamily::Sine => a * (b * x + c).sin(),
            FunctionFamily::Cosine => a * (b * x + c).cos(),
            FunctionFamily::Exponential => a * (b * x).exp(),
            FunctionFamily::Logarithmic => a * x.ln() + b,
            FunctionFamily::AbsLogarithmic => a * x.abs().ln() + b,
        }
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        FunctionFamily::ALL
            .into_iter()
            .find(|family| {
                family.key().eq_ignore_ascii_case(trimmed)
                    || family.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| Error::UnknownFamily(s.to_string()))
    }
}
