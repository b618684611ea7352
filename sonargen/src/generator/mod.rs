use std::fmt::Debug;

use anyhow::Result;

pub use json::Json;
pub use markdown::Markdown;

use crate::model::ApiDefinition;
use crate::output::Output;

mod json;
mod markdown;

/// Renders a filtered [ApiDefinition] to an [Output].
pub trait Generator: Debug {
    fn generate(&mut self, def: &ApiDefinition, output: &mut dyn Output) -> Result<()>;
}
