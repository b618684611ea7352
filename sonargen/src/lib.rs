pub use error::{Error, Result};
pub use filter::{Filter, Filterable};
pub use generator::Generator;
pub use loader::Loader;
pub use model::{Action, ApiDefinition, Change, Param, WebService, DEFAULT_PACKAGE_NAME};
pub use output::Output;
pub use transport::Transport;
pub use version::Version;

pub mod error;
pub mod filter;
pub mod generator;
pub mod loader;
pub mod model;
pub mod output;
pub mod transport;
pub mod version;

#[cfg(test)]
mod test_util;
