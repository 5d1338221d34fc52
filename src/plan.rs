//! The generation plan: which directories and files a project consists of.
//! Both lists are static tables; only the file contents depend on the
//! configuration.

use crate::config::ProjectConfig;
use crate::constants::{METADATA_FILE, SCRIPT_PATTERNS};
use crate::error::Result;
use crate::templates::TemplateResolver;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::{Path, PathBuf};

/// Directories of a generated project, relative to its root.
pub const DIRECTORIES: [&str; 18] = [
    "firmware/src",
    "firmware/include",
    "firmware/linker_scripts",
    "firmware/build",
    "firmware/drivers",
    "tools/scripts",
    "tools/configs",
    "tools/utilities",
    "tests/unit",
    "tests/integration",
    "docs/api",
    "docs/hardware",
    "hardware/schematics",
    "hardware/pcb",
    "hardware/3d_models",
    "config",
    "scripts",
    "utils",
];

/// Where the content of a generated file comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Rendered from the template with this identifier
    Template(&'static str),
    /// JSON dump of the configuration
    Metadata,
}

/// A file of a generated project, relative to its root.
#[derive(Debug, Clone, Copy)]
pub struct FileSpec {
    pub path: &'static str,
    pub source: ContentSource,
}

const fn template(path: &'static str, template_id: &'static str) -> FileSpec {
    FileSpec { path, source: ContentSource::Template(template_id) }
}

/// Files of a generated project, in the order they are written.
pub const FILES: [FileSpec; 22] = [
    template("firmware/Makefile", "makefile"),
    template("firmware/src/main.c", "main_c"),
    template("firmware/src/system.c", "system_c"),
    template("firmware/include/config.h", "config_h"),
    template("firmware/include/system.h", "system_h"),
    template("firmware/linker_scripts/linker_script.ld", "linker_script"),
    template("firmware/drivers/gpio.c", "gpio_c"),
    template("tools/scripts/flash_tool.py", "flash_tool"),
    template("tools/scripts/debug_tool.py", "debug_tool"),
    template("tools/configs/debug_config.json", "debug_config"),
    template("tools/utilities/memory_analyzer.py", "memory_analyzer"),
    template("tests/unit/test_main.py", "test_main"),
    template("tests/integration/test_hardware.py", "test_hardware"),
    template("docs/README.md", "readme"),
    template("docs/api/index.md", "api_docs"),
    template("docs/hardware/specification.md", "hardware_spec"),
    template(".gitignore", "gitignore"),
    template("LICENSE", "license"),
    FileSpec { path: METADATA_FILE, source: ContentSource::Metadata },
    template("project_guide.md", "project_guide"),
    template("scripts/build.sh", "build_sh"),
    template("scripts/deploy.sh", "deploy_sh"),
];

/// How a generated file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Regular,
    ExecutableScript,
}

/// Classifies file names into [`FileRole`]s.
pub struct ScriptMatcher {
    globs: GlobSet,
}

impl ScriptMatcher {
    pub fn new() -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in SCRIPT_PATTERNS {
            builder.add(Glob::new(pattern).expect("script pattern is valid"));
        }
        let globs = builder.build().expect("script patterns are valid");
        Self { globs }
    }

    /// Role of the file at `path`, decided by its file name alone.
    pub fn role_of(&self, path: &Path) -> FileRole {
        match path.file_name() {
            Some(name) if self.globs.is_match(name) => FileRole::ExecutableScript,
            _ => FileRole::Regular,
        }
    }
}

impl Default for ScriptMatcher {
    fn default() -> Self {
        ScriptMatcher::new()
    }
}

/// A file to write: destination, full content, and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub content: String,
    pub role: FileRole,
}

/// Everything a generation run creates, in order.
#[derive(Debug, Clone)]
pub struct Plan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<FileEntry>,
}

/// Directories to create for a project rooted at `base_path`.
pub fn directory_plan<P: AsRef<Path>>(base_path: P) -> Vec<PathBuf> {
    let base_path = base_path.as_ref();
    DIRECTORIES.iter().map(|dir| base_path.join(dir)).collect()
}

/// Files to write for a project rooted at `base_path`, with their rendered content.
///
/// # Errors
/// * `Error::TemplateNotFound` if a template the plan needs is not in the store
pub fn file_plan<P: AsRef<Path>>(
    base_path: P,
    config: &ProjectConfig,
    resolver: &TemplateResolver,
) -> Result<Vec<FileEntry>> {
    let base_path = base_path.as_ref();
    let context = config.context();
    let scripts = ScriptMatcher::new();

    FILES
        .iter()
        .map(|spec| {
            let path = base_path.join(spec.path);
            let content = match spec.source {
                ContentSource::Template(template_id) => {
                    debug!("Rendering '{}' for {}", template_id, path.display());
                    resolver.render(template_id, &context)?
                }
                ContentSource::Metadata => config.to_metadata(),
            };
            let role = scripts.role_of(&path);
            Ok(FileEntry { path, content, role })
        })
        .collect()
}

/// Builds the directory and file plans for a project rooted at `base_path`.
pub fn build_plan<P: AsRef<Path>>(
    base_path: P,
    config: &ProjectConfig,
    resolver: &TemplateResolver,
) -> Result<Plan> {
    let base_path = base_path.as_ref();
    let directories = directory_plan(base_path);
    let files = file_plan(base_path, config, resolver)?;
    Ok(Plan { directories, files })
}
