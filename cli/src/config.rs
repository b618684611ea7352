use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sonargen", author, version, about)]
pub struct Config {
    /// Base URL of the server.
    #[arg(long, default_value = sonargen::loader::DEFAULT_HOST)]
    pub host: String,

    /// Keep deprecated services, actions and params.
    #[arg(long)]
    pub deprecated: bool,

    /// Keep internal services, actions and params.
    #[arg(long)]
    pub internal: bool,

    /// Target API version, e.g. 9.9. Defaults to the server's version.
    #[arg(long, value_name = "VERSION")]
    pub target: Option<String>,

    /// Value of the Authorization header, e.g. 'Basic YWRtaW46YWRtaW4='.
    #[arg(long)]
    pub auth: Option<String>,

    /// Package name of the generated client. Defaults to 'sonarqube_client'.
    #[arg(long)]
    pub package: Option<String>,

    /// Read the catalog from a saved `api/webservices/list` response instead of the server.
    ///
    /// The server isn't contacted at all, so --target is required.
    #[arg(long, value_name = "FILE", requires = "target")]
    pub catalog: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Name of the generator to use.
    #[arg(short, long, default_value = "json")]
    pub generator: GeneratorName,

    /// Output file. Writes to stdout if not supplied.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GeneratorName {
    Json,
    Markdown,
}

impl GeneratorName {
    pub fn create_impl(&self) -> Box<dyn sonargen::Generator> {
        match self {
            GeneratorName::Json => Box::<sonargen::generator::Json>::default(),
            GeneratorName::Markdown => Box::<sonargen::generator::Markdown>::default(),
        }
    }
}
