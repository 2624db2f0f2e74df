//! Prompt templates for document analysis.
//!
//! Templates are compiled into the binary and use `{{ name }}` placeholders.
//! Every placeholder must have a value at render time.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Placeholder pattern: `{{ name }}` with lowercase snake_case names.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([a-z_][a-z0-9_]*)\s*\}\}").unwrap());

static TEMPLATES: &[(&str, &str)] = &[
    ("check_identity", include_str!("../prompts/check_identity.txt")),
    (
        "check_extract_identity",
        include_str!("../prompts/check_extract_identity.txt"),
    ),
];

#[derive(Debug, Error, PartialEq)]
pub enum PromptError {
    #[error("Unknown prompt template: {0:?}")]
    UnknownTemplate(String),

    #[error("Missing value for \"{var_name}\" in prompt template {template:?}")]
    MissingVariable { template: String, var_name: String },
}

/// Values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct PromptVars {
    values: HashMap<String, String>,
}

impl PromptVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets `expected_values` and the derived `expected_values_formatted`,
    /// one `- value` line per entry.
    pub fn expected_values<S: AsRef<str>>(self, values: &[S]) -> Self {
        let values: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
        let formatted = values
            .iter()
            .map(|v| format!("- {v}"))
            .collect::<Vec<_>>()
            .join("\n");
        let joined = values.join(", ");
        self.set("expected_values", joined)
            .set("expected_values_formatted", formatted)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

pub struct PromptTemplate;

impl PromptTemplate {
    pub const CHECK_IDENTITY: &'static str = "check_identity";
    pub const CHECK_EXTRACT_IDENTITY: &'static str = "check_extract_identity";

    /// Render the template `name` with `vars`.
    pub fn load(name: &str, vars: &PromptVars) -> Result<String, PromptError> {
        let source = TEMPLATES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, body)| *body)
            .ok_or_else(|| PromptError::UnknownTemplate(name.to_string()))?;

        render(name, source, vars)
    }
}

fn render(template: &str, source: &str, vars: &PromptVars) -> Result<String, PromptError> {
    let mut missing: Option<PromptError> = None;

    let rendered = PLACEHOLDER_RE.replace_all(source, |caps: &regex::Captures| {
        let var_name = &caps[1];
        match vars.get(var_name) {
            Some(value) => value.to_string(),
            None => {
                missing.get_or_insert_with(|| PromptError::MissingVariable {
                    template: template.to_string(),
                    var_name: var_name.to_string(),
                });
                String::new()
            }
        }
    });

    match missing {
        Some(err) => Err(err),
        None => Ok(rendered.trim_end().to_string()),
    }
}
