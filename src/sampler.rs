use crate::domain::Domain;
use crate::error::Result;
use crate::family::FunctionFamily;
use crate::parameters::ParameterSet;
use crate::utils;
use num_traits::Float;
use num_traits::cast::FromPrimitive;

/// Evaluated (x, y) pairs in increasing x order. Non-finite y values are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<F: Float> {
    points: Vec<(F, F)>,
}

impl<F: Float> Sample<F> {
    pub fn points(&self) -> &[(F, F)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (F, F)> {
        self.points.iter()
    }

    pub fn xs(&self) -> impl Iterator<Item = F> {
        self.points.iter().map(|(x, _)| *x)
    }

    pub fn ys(&self) -> impl Iterator<Item = F> {
        self.points.iter().map(|(_, y)| *y)
    }

    /// Maximal runs of consecutive points with finite y, for renderers that
    /// leave gaps where the function is undefined.
    pub fn finite_segments(&self) -> Vec<&[(F, F)]> {
        self.points
            .split(|(_, y)| !y.is_finite())
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    pub fn to_arrays(&self) -> Vec<[F; 2]> {
        self.points.iter().map(|(x, y)| [*x, *y]).collect()
    }
}

impl<F: Float> IntoIterator for Sample<F> {
    type Item = (F, F);
    type IntoIter = std::vec::IntoIter<(F, F)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, F: Float> IntoIterator for &'a Sample<F> {
    type Item = &'a (F, F);
    type IntoIter = std::slice::Iter<'a, (F, F)>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Evaluates `family` at `domain.samples` evenly spaced points from
/// `domain.x_min` to `domain.x_max`, both ends included.
///
/// Parameters are checked before the domain, so a call that violates both
/// reports the missing parameter.
pub fn sample<F: Float + FromPrimitive>(
    family: FunctionFamily,
    parameters: &ParameterSet<F>,
    domain: &Domain<F>,
) -> Result<Sample<F>> {
    let evaluator = family.evaluator(parameters)?;
    domain.validate()?;

    let points = utils::evenly_spaced(domain.x_min, domain.x_max, domain.samples)
        .map(|x| (x, evaluator(x)))
        .collect::<Vec<_>>();

    log::trace!("sampled {} at {} points", family, points.len());
    Ok(Sample { points })
}
