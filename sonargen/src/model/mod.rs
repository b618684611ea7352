use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::version::Version;

pub mod naming;

/// Package name used when the caller doesn't supply one.
pub const DEFAULT_PACKAGE_NAME: &str = "sonarqube_client";

const URL_PREFIX: &str = "api/";
const SERVICE_SUFFIX: &str = "Service";
const REQUEST_SUFFIX: &str = "Request";
const RESPONSE_SUFFIX: &str = "Response";

/// The root of a loaded API catalog.
///
/// The tree is strictly owned: [ApiDefinition] -> [WebService] -> [Action] -> [Param]/[Change].
/// Filtering prunes the children sequences in place, so any sequence observed before
/// [crate::Filter::apply] does not survive it.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    pub host: String,
    pub package_name: String,
    pub version: Version,
    pub web_services: Vec<WebService>,
}

/// Wire format of the catalog endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct Catalog {
    #[serde(default)]
    pub web_services: Vec<WebService>,
}

/// A group of [Action]s under a common path, e.g. `api/issues`.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct WebService {
    /// Back-filled from the owning [ApiDefinition] after decoding.
    #[serde(skip_deserializing)]
    pub package_name: String,
    pub path: String,
    pub since: Version,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub actions: Vec<Action>,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Action {
    /// Back-filled from the owning [WebService] after decoding.
    #[serde(skip_deserializing)]
    pub service_name: String,
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub since: Version,
    pub internal: bool,
    pub post: bool,
    pub has_response_example: bool,
    pub deprecated_since: Option<Version>,
    #[serde(deserialize_with = "nullable")]
    pub changelog: Vec<Change>,
    #[serde(deserialize_with = "nullable")]
    pub params: Vec<Param>,
}

/// A single changelog entry of an [Action].
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Change {
    pub description: String,
    pub version: String,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Param {
    pub key: String,
    pub since: Version,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub required: bool,
    pub internal: bool,
    pub example_value: Option<String>,
    pub deprecated_since: Option<Version>,
    pub possible_values: Option<Vec<String>>,
    /// The key this param replaced, along with the version the replacement happened.
    pub deprecated_key: Option<String>,
    pub deprecated_key_since: Option<Version>,
    pub default_value: Option<String>,
    pub maximum_value: Option<i64>,
    pub minimum_length: Option<u32>,
    pub maximum_length: Option<u32>,
    pub max_values_allowed: Option<u32>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_deprecated(deprecated_since: &Option<Version>) -> bool {
    deprecated_since.as_ref().is_some_and(Version::is_defined)
}

impl ApiDefinition {
    pub fn new(host: impl ToString, package_name: impl ToString, version: Version) -> Self {
        Self {
            host: host.to_string(),
            package_name: package_name.to_string(),
            version,
            web_services: vec![],
        }
    }

    /// Apply `default` if no package name was set.
    pub fn ensure_package_name(&mut self, default: &str) {
        if self.package_name.is_empty() {
            self.package_name = default.to_string();
        }
    }

    /// Fill in the denormalized [WebService::package_name] and [Action::service_name] fields
    /// from the tree.
    pub fn backfill_names(&mut self) {
        for service in &mut self.web_services {
            service.package_name = self.package_name.clone();
            let service_name = service.service_name();
            for action in &mut service.actions {
                action.service_name = service_name.clone();
            }
        }
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.web_services.iter().flat_map(|ws| ws.actions.iter())
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.actions().flat_map(|action| action.params.iter())
    }
}

impl WebService {
    /// True if _every_ action is internal. A service mixing internal and public actions is not
    /// itself internal, and neither is a service without actions.
    pub fn is_internal(&self) -> bool {
        !self.actions.is_empty() && self.actions.iter().all(|action| action.internal)
    }

    /// True if _every_ action is deprecated. A service without actions is not deprecated.
    pub fn is_deprecated(&self) -> bool {
        !self.actions.is_empty() && self.actions.iter().all(Action::is_deprecated)
    }

    /// `api/project_tags` -> `ProjectTags`
    pub fn getter(&self) -> String {
        let path = self.path.trim_start_matches('/');
        let name = path.strip_prefix(URL_PREFIX).unwrap_or(path);
        naming::make_exported(&naming::snake_to_camel(&naming::sanitize_identifier(name)))
    }

    /// `api/project_tags` -> `ProjectTagsService`
    pub fn service_name(&self) -> String {
        self.getter() + SERVICE_SUFFIX
    }

    /// `api/project_tags` -> `projectTagsService`
    pub fn variable(&self) -> String {
        naming::make_unexported(&self.service_name())
    }
}

impl Action {
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.deprecated_since)
    }

    pub fn method_name(&self) -> String {
        naming::make_exported(&naming::snake_to_camel(&naming::sanitize_identifier(
            &self.key,
        )))
    }

    pub fn request_type_name(&self) -> String {
        format!("{}{}{}", self.service_name, self.method_name(), REQUEST_SUFFIX)
    }

    pub fn response_type_name(&self) -> String {
        format!("{}{}{}", self.service_name, self.method_name(), RESPONSE_SUFFIX)
    }
}

impl Param {
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(&self.deprecated_since)
    }

    pub fn param_name(&self) -> String {
        naming::make_exported(&naming::snake_to_camel(&naming::sanitize_identifier(
            &self.key,
        )))
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.version, self.description)
    }
}
