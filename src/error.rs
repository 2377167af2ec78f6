use crate::family::FunctionFamily;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{family} requires parameter `{name}`")]
    MissingParameter {
        family: FunctionFamily,
        name: String,
    },

    #[error("invalid domain [{x_min}, {x_max}] with {samples} samples")]
    InvalidDomain {
        x_min: f64,
        x_max: f64,
        samples: usize,
    },

    #[error("parameter `{name}` expects a number, got `{text}`")]
    InvalidParameterValue { name: String, text: String },

    #[error("unknown function family `{0}`")]
    UnknownFamily(String),
}

pub type Result<T> = std::result::Result<T, Error>;
