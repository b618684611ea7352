use crate::model::{Action, ApiDefinition, Param, WebService};
use crate::version::Version;

pub const TEST_HOST: &str = "http://localhost:9000";
pub const TEST_PACKAGE: &str = "package_name";
/// Nothing listens on port 1.
pub const UNREACHABLE_HOST: &str = "http://127.0.0.1:1";

pub fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

pub fn definition(web_services: Vec<WebService>) -> ApiDefinition {
    ApiDefinition {
        web_services,
        ..ApiDefinition::new(TEST_HOST, TEST_PACKAGE, Version::zero())
    }
}

pub fn service(actions: Vec<Action>) -> WebService {
    WebService {
        package_name: TEST_PACKAGE.to_string(),
        path: "/api/normal".to_string(),
        since: Version::zero(),
        description: String::new(),
        actions,
    }
}

pub fn service_since(since: &str, actions: Vec<Action>) -> WebService {
    WebService {
        since: v(since),
        ..service(actions)
    }
}

pub fn action() -> Action {
    Action {
        key: "normal".to_string(),
        since: Version::zero(),
        ..Default::default()
    }
}

pub fn internal_action() -> Action {
    Action {
        internal: true,
        ..action()
    }
}

pub fn deprecated_action(since: &str) -> Action {
    Action {
        deprecated_since: Some(v(since)),
        ..action()
    }
}

pub fn action_since(since: &str) -> Action {
    Action {
        since: v(since),
        ..action()
    }
}

pub fn param() -> Param {
    Param {
        key: "param_key".to_string(),
        since: Version::zero(),
        description: "Description".to_string(),
        example_value: Some("example_value".to_string()),
        default_value: Some("default_value".to_string()),
        ..Default::default()
    }
}

pub fn deprecated_param(since: &str) -> Param {
    Param {
        deprecated_since: Some(v(since)),
        ..param()
    }
}

/// A trimmed down `/api/webservices/list` response.
pub const CATALOG_JSON: &str = r#"{
  "webServices": [
    {
      "path": "api/issues",
      "since": "3.6",
      "description": "Read and update issues.",
      "actions": [
        {
          "key": "search",
          "description": "Search for issues.<br>Requires the 'Browse' permission.",
          "since": "3.6",
          "internal": false,
          "post": false,
          "hasResponseExample": true,
          "changelog": [
            { "description": "Response field 'effort' added", "version": "7.6" }
          ],
          "params": [
            {
              "key": "additionalFields",
              "description": "Comma-separated list of the optional fields to be returned.",
              "since": "4.4",
              "required": false,
              "internal": false,
              "possibleValues": ["_all", "comments"],
              "deprecatedKey": "facetMode",
              "deprecatedKeySince": "7.2",
              "maximumValue": 500
            },
            {
              "key": "asc",
              "description": "Ascending sort",
              "required": false,
              "internal": false,
              "defaultValue": "true",
              "possibleValues": ["true", "false", "yes", "no"]
            },
            {
              "key": "componentKeys",
              "description": "Deprecated component keys.",
              "required": false,
              "internal": false,
              "deprecatedSince": "8.1",
              "maxValuesAllowed": 50
            },
            {
              "key": "debug",
              "required": false,
              "internal": true
            },
            {
              "key": "timeZone",
              "since": "10.2",
              "required": false,
              "internal": false,
              "exampleValue": "Europe/Paris",
              "minimumLength": 1,
              "maximumLength": 40
            }
          ]
        },
        {
          "key": "do_transition",
          "description": "Do workflow transition on an issue.",
          "since": "3.6",
          "internal": false,
          "post": true,
          "hasResponseExample": true,
          "deprecatedSince": "9.8",
          "changelog": [],
          "params": [
            { "key": "issue", "required": true, "internal": false, "exampleValue": "AU-Tpxb--iU5OvuD2FLy" }
          ]
        }
      ]
    },
    {
      "path": "api/ce",
      "since": "5.2",
      "description": "Get information on Compute Engine tasks.",
      "actions": [
        {
          "key": "submit",
          "since": "5.2",
          "internal": true,
          "post": true,
          "hasResponseExample": false,
          "changelog": [],
          "params": []
        }
      ]
    }
  ]
}"#;
