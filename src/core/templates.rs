//! Snippet templates.
//!
//! A [`Template`] is read and compiled once, then rendered for every copy
//! invocation. Rendering uses `tera` with autoescaping switched off: the
//! selected code has to come out exactly as it was selected, including `<`,
//! `&` and quotes that an HTML-oriented engine would escape.
//!
//! # Public API
//! - [`Template`]: A compiled template, rendered with [`Template::generate`]
//! - [`TemplateSet`]: The git-enabled and fallback variants
//! - [`DEFAULT_GIT_TEMPLATE`] / [`DEFAULT_FALLBACK_TEMPLATE`]: Built-in sources
//!
//! # Template fields
//! `file`, `start`, `end`, `language`, `code` are always available. The
//! git-enabled variant additionally gets `repo`, `branch`, `commit`, `status`,
//! `stagedCount`, `unstagedCount`, `untrackedCount` and `mergeInProgress`.

use crate::core::{
    config::Config,
    context::{Collected, ContextData},
    error::{Result, StarpostError},
};
use std::path::Path;
use tera::{Context as TeraContext, Tera};

/// Built-in template used when git data is available
pub const DEFAULT_GIT_TEMPLATE: &str = include_str!("../../templates/defaults/git_enabled.tera");

/// Built-in template used when git data is unavailable
pub const DEFAULT_FALLBACK_TEMPLATE: &str = include_str!("../../templates/defaults/fallback.tera");

/// A compiled template
pub struct Template {
    name: String,
    tera: Tera,
}

impl Template {
    /// Read and compile the template at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StarpostError::template_not_found(path)
            } else {
                StarpostError::Io(e)
            }
        })?;

        log::debug!("Loaded template {}", path.display());
        Self::from_source(path.display().to_string(), &source)
    }

    /// Compile `source`; `name` identifies the template in error messages
    pub fn from_source(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(&name, source)
            .map_err(|e| StarpostError::template_syntax(&name, &e))?;

        Ok(Self { name, tera })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with `data`
    pub fn generate(&self, data: &ContextData) -> Result<String> {
        let context = TeraContext::from_serialize(data)
            .map_err(|e| StarpostError::template_render(&self.name, &e))?;

        self.tera
            .render(&self.name, &context)
            .map_err(|e| StarpostError::template_render(&self.name, &e))
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template").field("name", &self.name).finish()
    }
}

/// Both template variants, loaded once at start-up
#[derive(Debug)]
pub struct TemplateSet {
    git_enabled: Template,
    fallback: Template,
}

impl TemplateSet {
    pub fn new(git_enabled: Template, fallback: Template) -> Self {
        Self {
            git_enabled,
            fallback,
        }
    }

    /// Built-in templates
    pub fn defaults() -> Result<Self> {
        Ok(Self::new(
            Template::from_source("git_enabled (built-in)", DEFAULT_GIT_TEMPLATE)?,
            Template::from_source("fallback (built-in)", DEFAULT_FALLBACK_TEMPLATE)?,
        ))
    }

    /// Templates named by `config`, built-ins for the ones it leaves unset
    pub fn load(config: &Config) -> Result<Self> {
        let git_enabled = match &config.git_template {
            Some(path) => Template::load(path)?,
            None => Template::from_source("git_enabled (built-in)", DEFAULT_GIT_TEMPLATE)?,
        };
        let fallback = match &config.fallback_template {
            Some(path) => Template::load(path)?,
            None => Template::from_source("fallback (built-in)", DEFAULT_FALLBACK_TEMPLATE)?,
        };

        Ok(Self::new(git_enabled, fallback))
    }

    pub fn git_enabled(&self) -> &Template {
        &self.git_enabled
    }

    pub fn fallback(&self) -> &Template {
        &self.fallback
    }

    /// Template matching the collected context
    pub fn select(&self, collected: &Collected) -> &Template {
        if collected.use_fallback() {
            &self.fallback
        } else {
            &self.git_enabled
        }
    }
}
