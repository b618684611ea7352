use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sonargen::transport::{catalog_url, Http, Memory};
use sonargen::{loader, ApiDefinition, Loader};

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let def = load(config).context("load API definition")?;
    let mut generator = config.generator.create_impl();
    match &config.out {
        None => generator.generate(&def, &mut sonargen::output::StdOut::default()),
        Some(path) => {
            info!("Generating '{:?}' to '{}'...", config.generator, path.display());
            let mut output = sonargen::output::File::create(path)?;
            generator.generate(&def, &mut output)?;
            output.flush()
        }
    }
}

fn load(config: &Config) -> Result<ApiDefinition> {
    let loader_config = loader_config(config);
    let def = match &config.catalog {
        Some(path) => Loader::new(offline_transport(config, path)?, loader_config).load()?,
        None => Loader::new(http_transport(config)?, loader_config).load()?,
    };
    Ok(def)
}

fn loader_config(config: &Config) -> loader::Config {
    loader::Config {
        host: config.host.clone(),
        target_version: config.target.clone(),
        authorization: config.auth.clone(),
        allow_deprecated: config.deprecated,
        allow_internal: config.internal,
        package_name: config.package.clone(),
        ..Default::default()
    }
}

fn http_transport(config: &Config) -> Result<Http> {
    Ok(match config.timeout {
        None => Http::default(),
        Some(secs) => Http::with_timeout(Duration::from_secs(secs))?,
    })
}

/// Serves the saved catalog at the URL the loader will ask for.
fn offline_transport(config: &Config, path: &Path) -> Result<Memory> {
    info!("Reading catalog from '{}'...", path.display());
    let body = fs::read(path).with_context(|| format!("read catalog '{}'", path.display()))?;
    Ok(Memory::default().with_body(catalog_url(&config.host, config.internal), body))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use anyhow::Result;
    use clap::Parser;
    use tempfile::tempdir;

    use crate::config::{Config, GeneratorName};
    use crate::{load, loader_config, run};

    const CATALOG: &str = r#"{"webServices":[
        {"path":"api/issues","since":"3.6","actions":[
            {"key":"search","since":"3.6","params":[
                {"key":"asc"},
                {"key":"debug","internal":true}
            ]},
            {"key":"set_tags","since":"5.1","deprecatedSince":"9.1"},
            {"key":"anonymize","since":"10.4"}
        ]},
        {"path":"api/ce","actions":[{"key":"submit","internal":true}]}
    ]}"#;

    fn parse(args: &[&str]) -> Result<Config> {
        Ok(Config::try_parse_from(
            std::iter::once("sonargen").chain(args.iter().copied()),
        )?)
    }

    fn write_catalog(dir: &Path) -> Result<String> {
        let path = dir.join("catalog.json");
        fs::write(&path, CATALOG)?;
        Ok(path.to_string_lossy().to_string())
    }

    #[test]
    fn defaults() -> Result<()> {
        let config = parse(&[])?;
        assert_eq!(config.host, "http://localhost:9000");
        assert!(!config.deprecated);
        assert!(!config.internal);
        assert_eq!(config.generator, GeneratorName::Json);
        assert!(config.out.is_none());
        Ok(())
    }

    #[test]
    fn catalog_requires_target() {
        assert!(parse(&["--catalog", "catalog.json"]).is_err());
        assert!(parse(&["--catalog", "catalog.json", "--target", "9.9"]).is_ok());
    }

    #[test]
    fn maps_loader_config() -> Result<()> {
        let config = parse(&[
            "--host",
            "http://sonar",
            "--deprecated",
            "--internal",
            "--target",
            "8.9",
            "--auth",
            "Basic abc",
            "--package",
            "client",
        ])?;
        let loader_config = loader_config(&config);
        assert_eq!(loader_config.host, "http://sonar");
        assert!(loader_config.allow_deprecated);
        assert!(loader_config.allow_internal);
        assert_eq!(loader_config.target_version.as_deref(), Some("8.9"));
        assert_eq!(loader_config.authorization.as_deref(), Some("Basic abc"));
        assert_eq!(loader_config.package_name.as_deref(), Some("client"));
        assert_eq!(loader_config.default_package_name, sonargen::DEFAULT_PACKAGE_NAME);
        Ok(())
    }

    #[test]
    fn loads_offline_catalog() -> Result<()> {
        let root = tempdir()?;
        let catalog = write_catalog(root.path())?;
        let def = load(&parse(&["--catalog", &catalog, "--target", "9.9"])?)?;
        assert_eq!(def.web_services.len(), 1);
        let issues = &def.web_services[0];
        assert_eq!(issues.actions.len(), 1);
        assert_eq!(issues.actions[0].key, "search");
        assert_eq!(issues.actions[0].params.len(), 1);
        Ok(())
    }

    #[test]
    fn loads_offline_catalog_with_internals() -> Result<()> {
        let root = tempdir()?;
        let catalog = write_catalog(root.path())?;
        let def = load(&parse(&[
            "--catalog",
            &catalog,
            "--target",
            "10.4",
            "--internal",
            "--deprecated",
        ])?)?;
        assert_eq!(def.web_services.len(), 2);
        assert_eq!(def.actions().count(), 4);
        Ok(())
    }

    #[test]
    fn missing_catalog_file_errors() -> Result<()> {
        let root = tempdir()?;
        let missing = root.path().join("nope.json");
        let config = parse(&["--catalog", &missing.to_string_lossy(), "--target", "1.1"])?;
        assert!(load(&config).is_err());
        Ok(())
    }

    #[test]
    fn writes_markdown() -> Result<()> {
        let root = tempdir()?;
        let catalog = write_catalog(root.path())?;
        let out = root.path().join("out/reference.md");
        run(&parse(&[
            "--catalog",
            &catalog,
            "--target",
            "9.9",
            "--package",
            "sonar",
            "-g",
            "markdown",
            "-o",
            &out.to_string_lossy(),
        ])?)?;
        let markdown = fs::read_to_string(out)?;
        assert!(markdown.starts_with("# sonar\n"));
        assert!(markdown.contains("## IssuesService"));
        assert!(markdown.contains("### Search"));
        assert!(!markdown.contains("SetTags"));
        Ok(())
    }

    #[test]
    fn writes_json() -> Result<()> {
        let root = tempdir()?;
        let catalog = write_catalog(root.path())?;
        let out = root.path().join("out.json");
        run(&parse(&[
            "--catalog",
            &catalog,
            "--target",
            "9.9",
            "-o",
            &out.to_string_lossy(),
        ])?)?;
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out)?)?;
        assert_eq!(json["packageName"], sonargen::DEFAULT_PACKAGE_NAME);
        assert_eq!(json["version"], "9.9");
        assert_eq!(
            json["webServices"][0]["actions"][0]["serviceName"],
            "IssuesService"
        );
        Ok(())
    }
}
