use anyhow::Result;
use itertools::Itertools;

use crate::generator::Generator;
use crate::model::{Action, ApiDefinition, Param, WebService};
use crate::output::Output;

/// Human readable reference of the definition, one section per service.
#[derive(Debug, Default)]
pub struct Markdown {}

impl Generator for Markdown {
    fn generate(&mut self, def: &ApiDefinition, o: &mut dyn Output) -> Result<()> {
        heading(1, &def.package_name, o)?;
        o.write_str(&format!(
            "Generated from `{}` for version `{}`.",
            def.host, def.version
        ))?;
        o.newline()?;

        for service in &def.web_services {
            o.newline()?;
            write_service(service, o)?;
        }
        Ok(())
    }
}

fn heading(depth: usize, text: &str, o: &mut dyn Output) -> Result<()> {
    o.write_str(&"#".repeat(depth))?;
    o.write(' ')?;
    o.write_str(text)?;
    o.newline()
}

fn write_service(service: &WebService, o: &mut dyn Output) -> Result<()> {
    heading(2, &service.service_name(), o)?;
    o.newline()?;
    o.write_str(&format!("`{}`, since {}.", service.path, service.since))?;
    o.newline()?;
    write_description(&service.description, o)?;

    if service.actions.is_empty() {
        o.newline()?;
        o.write_str("This service has no actions.")?;
        o.newline()?;
    }
    for action in &service.actions {
        o.newline()?;
        write_action(service, action, o)?;
    }
    Ok(())
}

fn write_action(service: &WebService, action: &Action, o: &mut dyn Output) -> Result<()> {
    heading(3, &action.method_name(), o)?;
    o.newline()?;
    let method = if action.post { "POST" } else { "GET" };
    o.write_str(&format!(
        "`{} {}/{}`, since {}.",
        method, service.path, action.key, action.since
    ))?;
    let mut tags = vec![];
    if action.internal {
        tags.push("internal".to_string());
    }
    if action.is_deprecated() {
        if let Some(deprecated_since) = &action.deprecated_since {
            tags.push(format!("deprecated since {}", deprecated_since));
        }
    }
    if !tags.is_empty() {
        o.write_str(&format!(" _{}_", tags.join(", ")))?;
    }
    o.newline()?;
    write_description(&action.description, o)?;

    if !action.params.is_empty() {
        o.newline()?;
        o.write_str("| Param | Required | Since | Description |")?;
        o.newline()?;
        o.write_str("|---|---|---|---|")?;
        o.newline()?;
        for param in &action.params {
            write_param(param, o)?;
        }
    }

    if !action.changelog.is_empty() {
        o.newline()?;
        o.write_str("Changelog:")?;
        o.newline()?;
        for change in &action.changelog {
            o.write_str(&format!("- {}", change))?;
            o.newline()?;
        }
    }
    Ok(())
}

fn write_param(param: &Param, o: &mut dyn Output) -> Result<()> {
    let mut notes = vec![];
    if let Some(values) = &param.possible_values {
        notes.push(format!(
            "One of {}.",
            values.iter().map(|v| format!("`{}`", v)).join(", ")
        ));
    }
    if let Some(default) = &param.default_value {
        notes.push(format!("Default `{}`.", default));
    }
    if let Some(example) = &param.example_value {
        notes.push(format!("Example `{}`.", example));
    }
    if let Some(key) = &param.deprecated_key {
        let since = param
            .deprecated_key_since
            .as_ref()
            .map(|since| format!(" since {}", since))
            .unwrap_or_default();
        notes.push(format!("Replaces `{}`{}.", key, since));
    }
    let description = std::iter::once(table_cell(&param.description))
        .chain(notes)
        .filter(|s| !s.is_empty())
        .join(" ");
    o.write_str(&format!(
        "| `{}` | {} | {} | {} |",
        param.key,
        if param.required { "yes" } else { "no" },
        param.since,
        description
    ))?;
    o.newline()
}

fn write_description(description: &str, o: &mut dyn Output) -> Result<()> {
    let description = format_description(description);
    if description.trim().is_empty() {
        return Ok(());
    }
    o.newline()?;
    o.write_str(description.trim())?;
    o.newline()
}

/// Server descriptions carry a handful of html tags; turn them into markdown.
fn format_description(description: &str) -> String {
    description
        .replace("<br />", "\n")
        .replace("<br/>", "\n")
        .replace("<br>", "\n")
        .replace("<ul>", "\n")
        .replace("</ul>", "")
        .replace("<li>", "* ")
        .replace("</li>", "\n")
}

fn table_cell(description: &str) -> String {
    format_description(description)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .join(" ")
        .replace('|', "\\|")
}
