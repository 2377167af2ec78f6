use crate::family::FunctionFamily;

pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
pub const MIN_SAMPLE_COUNT: usize = 2;

pub const RANGE_SEPARATOR: char = ',';
pub const DEFAULT_RANGE: &str = "-10,10";

pub const X_AXIS_LABEL: &str = "x";
pub const Y_AXIS_LABEL: &str = "y";

/// One button per family, in the order the sidebar plotter shows them.
pub const SIDEBAR_FAMILIES: [FunctionFamily; 5] = [
    FunctionFamily::Sine,
    FunctionFamily::Cosine,
    FunctionFamily::Exponential,
    FunctionFamily::Quadratic,
    FunctionFamily::AbsLogarithmic,
];

/// One notebook tab per family, in the order the teaching plotter shows them.
pub const NOTEBOOK_FAMILIES: [FunctionFamily; 5] = [
    FunctionFamily::Linear,
    FunctionFamily::Quadratic,
    FunctionFamily::Sine,
    FunctionFamily::Exponential,
    FunctionFamily::Logarithmic,
];

pub const INIT_FAMILY: FunctionFamily = FunctionFamily::Sine;
