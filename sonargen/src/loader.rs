use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::model::{ApiDefinition, Catalog, DEFAULT_PACKAGE_NAME};
use crate::transport::{catalog_url, version_url, Transport};
use crate::version::Version;

pub const DEFAULT_HOST: &str = "http://localhost:9000";

/// Everything the [Loader] needs to produce a filtered [ApiDefinition].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the server, e.g. `http://localhost:9000`.
    pub host: String,

    /// Version to filter against. If not set, the server's own version is used.
    pub target_version: Option<String>,

    /// Value of the `Authorization` header, e.g. `Basic YWRtaW46YWRtaW4=`.
    pub authorization: Option<String>,

    pub allow_deprecated: bool,

    /// Also asks the server to list internal services.
    pub allow_internal: bool,

    pub package_name: Option<String>,

    /// Used when `package_name` is unset or empty.
    pub default_package_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            target_version: None,
            authorization: None,
            allow_deprecated: false,
            allow_internal: false,
            package_name: None,
            default_package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }
}

/// Loads an [ApiDefinition] from a server in three stages, stopping at the first error:
///
/// 1. resolve the target version, see [Loader::resolve_target_version]
/// 2. fetch and decode the catalog, see [Loader::fetch_definition]
/// 3. filter the catalog with [Filter::apply]
pub struct Loader<T: Transport> {
    transport: T,
    config: Config,
}

impl<T: Transport> Loader<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn load(&self) -> Result<ApiDefinition> {
        info!("Resolving target version...");
        let version = self.resolve_target_version()?;
        info!("Target version: {}", version);

        info!("Fetching API definition from '{}'...", self.config.host);
        let mut def = self.fetch_definition(version.clone())?;
        debug!(
            "Fetched {} services, {} actions",
            def.web_services.len(),
            def.actions().count()
        );

        info!("Filtering API definition...");
        self.filter(version).apply(&mut def);
        info!(
            "Kept {} services, {} actions, {} params",
            def.web_services.len(),
            def.actions().count(),
            def.params().count()
        );
        Ok(def)
    }

    /// The explicitly configured version if there is one, otherwise the version reported by the
    /// server. Any failure is wrapped in [Error::VersionResolutionFailed].
    pub fn resolve_target_version(&self) -> Result<Version> {
        self.target_version_string()
            .and_then(|version| Version::parse(&version))
            .map_err(|err| Error::VersionResolutionFailed(Box::new(err)))
    }

    fn target_version_string(&self) -> Result<String> {
        if let Some(version) = self.config.target_version.as_deref() {
            if !version.trim().is_empty() {
                return Ok(version.to_string());
            }
        }
        let body = self
            .transport
            .get(&version_url(&self.config.host), self.authorization())?;
        Ok(String::from_utf8_lossy(&body).trim().to_string())
    }

    /// Fetch and decode the unfiltered catalog, then apply the package name default and
    /// back-fill the names derived from the tree. Any failure is wrapped in
    /// [Error::DefinitionLoadFailed].
    pub fn fetch_definition(&self, version: Version) -> Result<ApiDefinition> {
        self.fetch_catalog()
            .map(|catalog| {
                let mut def = ApiDefinition {
                    web_services: catalog.web_services,
                    ..ApiDefinition::new(
                        &self.config.host,
                        self.config.package_name.as_deref().unwrap_or_default(),
                        version,
                    )
                };
                def.ensure_package_name(&self.config.default_package_name);
                def.backfill_names();
                def
            })
            .map_err(|err| Error::DefinitionLoadFailed(Box::new(err)))
    }

    fn fetch_catalog(&self) -> Result<Catalog> {
        let url = catalog_url(&self.config.host, self.config.allow_internal);
        let body = self.transport.get(&url, self.authorization())?;
        serde_json::from_slice(&body).map_err(Error::MalformedCatalog)
    }

    fn filter(&self, target: Version) -> Filter {
        Filter::new(
            self.config.allow_deprecated,
            self.config.allow_internal,
            target,
        )
    }

    fn authorization(&self) -> Option<&str> {
        self.config
            .authorization
            .as_deref()
            .filter(|authorization| !authorization.is_empty())
    }
}
