//! Template stores and template resolution for embedsmith.
//! Templates come either compiled into the binary or from a directory of
//! `*.tpl` files, and are looked up by identifier (the file stem).
use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use globset::{Glob, GlobMatcher};
use indexmap::IndexMap;
use log::debug;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only repository of template text keyed by identifier.
pub trait TemplateStore {
    /// Returns the text of the template named `template_id`, if the store has it.
    fn get(&self, template_id: &str) -> Option<Cow<'_, str>>;

    /// Identifiers of every template in the store, sorted.
    fn list_available(&self) -> Vec<String>;
}

macro_rules! embedded {
    ($($name:literal),+ $(,)?) => {
        &[$(($name, include_str!(concat!("../templates/", $name, ".tpl")))),+]
    };
}

/// Built-in templates, sorted by identifier.
const EMBEDDED: &[(&str, &str)] = embedded![
    "api_docs",
    "build_sh",
    "config_h",
    "debug_config",
    "debug_tool",
    "deploy_sh",
    "flash_tool",
    "gitignore",
    "gpio_c",
    "hardware_spec",
    "license",
    "linker_script",
    "main_c",
    "makefile",
    "memory_analyzer",
    "project_guide",
    "readme",
    "system_c",
    "system_h",
    "test_hardware",
    "test_main",
];

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplates {
    fn get(&self, template_id: &str) -> Option<Cow<'_, str>> {
        EMBEDDED
            .iter()
            .find(|(id, _)| *id == template_id)
            .map(|(_, text)| Cow::Borrowed(*text))
    }

    fn list_available(&self) -> Vec<String> {
        EMBEDDED.iter().map(|(id, _)| id.to_string()).collect()
    }
}

/// Templates read from a directory when the store is created.
#[derive(Debug)]
pub struct DirectoryTemplates {
    root: PathBuf,
    templates: IndexMap<String, String>,
}

fn template_matcher() -> GlobMatcher {
    Glob::new(&format!("*.{TEMPLATE_EXTENSION}"))
        .expect("template glob is valid")
        .compile_matcher()
}

impl DirectoryTemplates {
    /// Loads every `*.tpl` file directly inside `root`.
    ///
    /// # Errors
    /// * `Error::IoError` if the directory or one of its templates cannot be read
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let matcher = template_matcher();
        let mut templates = IndexMap::new();

        for entry in WalkDir::new(&root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !matcher.is_match(entry.file_name()) {
                continue;
            }
            let Some(template_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            debug!("Loading template '{}' from {}", template_id, path.display());
            let text = std::fs::read_to_string(path)?;
            templates.insert(template_id.to_string(), text);
        }

        Ok(Self { root, templates })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplates {
    fn get(&self, template_id: &str) -> Option<Cow<'_, str>> {
        self.templates.get(template_id).map(|text| Cow::Borrowed(text.as_str()))
    }

    fn list_available(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.keys().cloned().collect();
        ids.sort();
        ids
    }
}

/// Resolves template identifiers against a store and renders them.
pub struct TemplateResolver<'a> {
    store: &'a dyn TemplateStore,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(store: &'a dyn TemplateStore, renderer: &'a dyn TemplateRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn list_available(&self) -> Vec<String> {
        self.store.list_available()
    }

    /// Renders the template named `template_id` against `context`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the store has no such template
    pub fn render(&self, template_id: &str, context: &serde_json::Value) -> Result<String> {
        let template = self
            .store
            .get(template_id)
            .ok_or_else(|| Error::TemplateNotFound { template_id: template_id.to_string() })?;

        Ok(self.renderer.render(&template, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_list_is_sorted() {
        let ids = EmbeddedTemplates::new().list_available();
        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(ids.len(), 21);
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_embedded_lookup() {
        let store = EmbeddedTemplates::new();
        assert!(store.get("makefile").is_some());
        assert!(store.get("makefile.tpl").is_none());
        assert!(store.get("missing").is_none());
    }
}
