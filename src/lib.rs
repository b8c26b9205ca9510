mod as_value;
mod bound;
mod crud;
mod descriptor;
mod error;
mod params;
mod payload;
mod provider;
mod resolver;
mod source;
mod template;
mod util;
mod value;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use bound::*;
pub use crud::*;
pub use descriptor::*;
pub use error::*;
pub use params::*;
pub use payload::*;
pub use provider::*;
pub use resolver::*;
pub use source::*;
pub use template::*;
pub use util::*;
pub use value::*;

/// Result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
