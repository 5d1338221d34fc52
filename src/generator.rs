//! Generation orchestration.
//! Resolves the conflict with an existing project directory, builds the plan,
//! and hands it to the materializer.

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::materializer::{materialize, MaterializeStats};
use crate::plan::build_plan;
use crate::prompt::Prompter;
use crate::templates::TemplateResolver;
use log::{debug, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// Stages of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    ConflictCheck,
    Planning,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::ConflictCheck => "conflict-check",
            Stage::Planning => "planning",
            Stage::Writing => "writing",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub base_path: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub scripts: usize,
}

impl GenerationReport {
    fn new(base_path: &Path, stats: MaterializeStats) -> Self {
        Self {
            base_path: base_path.to_path_buf(),
            directories: stats.directories,
            files: stats.files,
            scripts: stats.scripts,
        }
    }
}

/// Runs one generation: conflict check, planning, writing.
pub struct Generator<'a> {
    resolver: &'a TemplateResolver<'a>,
    prompt: &'a dyn Prompter,
    overwrite: bool,
}

impl<'a> Generator<'a> {
    /// # Arguments
    /// * `resolver` - Template resolver used to render file contents
    /// * `prompt` - Asked before writing into an existing directory
    /// * `overwrite` - Write into an existing directory without asking
    pub fn new(resolver: &'a TemplateResolver<'a>, prompt: &'a dyn Prompter, overwrite: bool) -> Self {
        Self { resolver, prompt, overwrite }
    }

    /// Generates the project for `config` at `base_path`.
    ///
    /// # Errors
    /// * `Error::UserCancelled` if the directory exists and the user declines to overwrite it
    /// * `Error::TemplateNotFound` if a template is missing; nothing has been written then
    /// * `Error::IoError` if a directory or file cannot be written; earlier writes remain
    pub fn generate<P: AsRef<Path>>(
        &self,
        base_path: P,
        config: &ProjectConfig,
    ) -> Result<GenerationReport> {
        let base_path = base_path.as_ref();
        let mut stage = Stage::Init;

        let result = self.run(base_path, config, &mut stage);
        match &result {
            Ok(_) => advance(&mut stage, Stage::Done),
            Err(err) => {
                debug!("Generation failed during {stage}: {err}");
                advance(&mut stage, Stage::Failed);
            }
        }
        result
    }

    fn run(
        &self,
        base_path: &Path,
        config: &ProjectConfig,
        stage: &mut Stage,
    ) -> Result<GenerationReport> {
        advance(stage, Stage::ConflictCheck);
        self.check_conflict(base_path)?;

        advance(stage, Stage::Planning);
        let plan = build_plan(base_path, config, self.resolver)?;
        debug!(
            "Planned {} directories and {} files",
            plan.directories.len(),
            plan.files.len()
        );

        advance(stage, Stage::Writing);
        let stats = materialize(&plan)?;

        Ok(GenerationReport::new(base_path, stats))
    }

    fn check_conflict(&self, base_path: &Path) -> Result<()> {
        if !base_path.is_dir() {
            return Ok(());
        }

        if self.overwrite {
            warn!("Overwriting existing directory: {}", base_path.display());
            return Ok(());
        }

        let confirmed = self.prompt.confirm(
            false,
            format!("The directory '{}' already exists. Overwrite?", base_path.display()),
        )?;
        if !confirmed {
            return Err(Error::UserCancelled { output_dir: base_path.display().to_string() });
        }
        Ok(())
    }
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!("{} -> {}", stage, next);
    *stage = next;
}
