use anyhow::{Context, Result};

use crate::generator::Generator;
use crate::model::ApiDefinition;
use crate::output::Output;

/// Writes the definition as JSON, including the back-filled names.
#[derive(Debug, Default)]
pub struct Json {
    pub compact: bool,
}

impl Generator for Json {
    fn generate(&mut self, def: &ApiDefinition, output: &mut dyn Output) -> Result<()> {
        let json = if self.compact {
            serde_json::to_string(def)
        } else {
            serde_json::to_string_pretty(def)
        }
        .context("serialize API definition")?;
        output.write_str(&json)?;
        output.newline()
    }
}
