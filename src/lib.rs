pub mod constants;
pub mod domain;
pub mod error;
pub mod family;
pub mod parameters;
#[cfg(feature = "egui-plot")]
pub mod plot;
pub mod sampler;
pub mod session;
pub mod utils;

pub use domain::Domain;
pub use error::{Error, Result};
pub use family::FunctionFamily;
pub use parameters::ParameterSet;
pub use sampler::{Sample, sample};
pub use session::PlotSession;
