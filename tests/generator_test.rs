use embedsmith::config::{load_config, ProjectConfig};
use embedsmith::constants::METADATA_FILE;
use embedsmith::error::{Error, Result};
use embedsmith::generator::Generator;
use embedsmith::plan::DIRECTORIES;
use embedsmith::prompt::Prompter;
use embedsmith::renderer::SafeSubstitutionRenderer;
use embedsmith::templates::{DirectoryTemplates, EmbeddedTemplates, TemplateResolver};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Answers every confirmation with a fixed value and counts the questions.
struct FixedAnswer {
    answer: bool,
    asked: Cell<usize>,
}

impl FixedAnswer {
    fn new(answer: bool) -> Self {
        Self { answer, asked: Cell::new(0) }
    }
}

impl Prompter for FixedAnswer {
    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(skip || self.answer)
    }
}

fn generate(base: &Path, config: &ProjectConfig, prompt: &dyn Prompter, overwrite: bool) -> Result<()> {
    let store = EmbeddedTemplates::new();
    let renderer = SafeSubstitutionRenderer::new();
    let resolver = TemplateResolver::new(&store, &renderer);
    Generator::new(&resolver, prompt, overwrite).generate(base, config).map(|_| ())
}

#[test_log::test]
fn test_default_project() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("out");
    let prompt = FixedAnswer::new(false);

    generate(&base, &ProjectConfig::default(), &prompt, false).unwrap();

    assert_eq!(prompt.asked.get(), 0);
    assert!(base.join("firmware/src/main.c").is_file());
    assert!(base.join("firmware/include/config.h").is_file());
    assert!(base.join(METADATA_FILE).is_file());
    for dir in DIRECTORIES {
        assert!(base.join(dir).is_dir(), "{dir} was not created");
    }

    let metadata: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(base.join(METADATA_FILE)).unwrap()).unwrap();
    assert_eq!(metadata["mcu"], "cortex-m4");
}

#[test]
fn test_report_counts() {
    let temp_dir = TempDir::new().unwrap();
    let store = EmbeddedTemplates::new();
    let renderer = SafeSubstitutionRenderer::new();
    let resolver = TemplateResolver::new(&store, &renderer);
    let prompt = FixedAnswer::new(false);

    let report = Generator::new(&resolver, &prompt, false)
        .generate(temp_dir.path().join("proj"), &ProjectConfig::default())
        .unwrap();

    assert_eq!(report.base_path, temp_dir.path().join("proj"));
    assert_eq!(report.directories, 18);
    assert_eq!(report.files, 22);
    assert_eq!(report.scripts, 7);
}

#[test]
fn test_custom_config_values_are_rendered() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("custom");
    let config = ProjectConfig {
        project_name: "test-firmware".to_string(),
        mcu: "cortex-m7".to_string(),
        flash_size: "1M".to_string(),
        ..Default::default()
    };

    generate(&base, &config, &FixedAnswer::new(false), false).unwrap();

    let makefile = fs::read_to_string(base.join("firmware/Makefile")).unwrap();
    assert!(makefile.contains("cortex-m7"));
    assert!(makefile.contains("PROJECT   = test-firmware"));

    let linker = fs::read_to_string(base.join("firmware/linker_scripts/linker_script.ld")).unwrap();
    assert!(linker.contains("ORIGIN = 0x08000000, LENGTH = 1M"));
}

#[test]
fn test_metadata_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("roundtrip");
    let config = ProjectConfig {
        author: "Grace Hopper".to_string(),
        license: "BSD-3-Clause".to_string(),
        description: "Weather station \"node\" firmware".to_string(),
        ..Default::default()
    };

    generate(&base, &config, &FixedAnswer::new(false), false).unwrap();

    assert_eq!(load_config(base.join(METADATA_FILE)).unwrap(), config);
}

#[test]
fn test_overwrite_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    let config = ProjectConfig::default();
    let prompt = FixedAnswer::new(false);

    generate(&first, &config, &prompt, true).unwrap();
    generate(&second, &config, &prompt, true).unwrap();
    generate(&first, &config, &prompt, true).unwrap();

    assert_eq!(prompt.asked.get(), 0);
    assert!(!dir_diff::is_different(&first, &second).unwrap());
}

#[test]
fn test_declined_overwrite_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("existing");
    fs::create_dir(&base).unwrap();
    fs::write(base.join("notes.txt"), "keep me").unwrap();
    let prompt = FixedAnswer::new(false);

    let result = generate(&base, &ProjectConfig::default(), &prompt, false);

    assert!(matches!(result, Err(Error::UserCancelled { .. })));
    assert_eq!(prompt.asked.get(), 1);
    let entries: Vec<_> = fs::read_dir(&base).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(fs::read_to_string(base.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_confirmed_overwrite_keeps_unrelated_files() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("existing");
    fs::create_dir_all(base.join("firmware")).unwrap();
    fs::write(base.join("notes.txt"), "keep me").unwrap();
    fs::write(base.join("firmware/Makefile"), "stale").unwrap();
    let prompt = FixedAnswer::new(true);

    generate(&base, &ProjectConfig::default(), &prompt, false).unwrap();

    assert_eq!(prompt.asked.get(), 1);
    assert_eq!(fs::read_to_string(base.join("notes.txt")).unwrap(), "keep me");
    let makefile = fs::read_to_string(base.join("firmware/Makefile")).unwrap();
    assert!(makefile.starts_with("# Makefile for firmware"));
}

#[test]
fn test_missing_template_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("makefile.tpl"), "MCU = ${mcu}\n").unwrap();
    let base = temp_dir.path().join("partial");

    let store = DirectoryTemplates::load(&templates).unwrap();
    let renderer = SafeSubstitutionRenderer::new();
    let resolver = TemplateResolver::new(&store, &renderer);
    let prompt = FixedAnswer::new(true);
    let result = Generator::new(&resolver, &prompt, false).generate(&base, &ProjectConfig::default());

    match result {
        Err(Error::TemplateNotFound { template_id }) => assert_eq!(template_id, "main_c"),
        other => panic!("Expected TemplateNotFound, got {other:?}"),
    }
    assert!(!base.exists());
}

#[test]
fn test_existing_file_at_base_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("taken");
    fs::write(&base, "a file, not a directory").unwrap();
    let prompt = FixedAnswer::new(false);

    let result = generate(&base, &ProjectConfig::default(), &prompt, false);

    assert!(matches!(result, Err(Error::IoError(_))));
    assert_eq!(prompt.asked.get(), 0);
}

#[cfg(unix)]
#[test]
fn test_scripts_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("perms");
    generate(&base, &ProjectConfig::default(), &FixedAnswer::new(false), false).unwrap();

    let is_executable =
        |path: &str| fs::metadata(base.join(path)).unwrap().permissions().mode() & 0o111 != 0;

    assert!(is_executable("tools/scripts/flash_tool.py"));
    assert!(is_executable("tools/scripts/debug_tool.py"));
    assert!(is_executable("scripts/build.sh"));
    assert!(!is_executable("docs/README.md"));
    assert!(!is_executable("firmware/src/main.c"));
    assert!(!is_executable(METADATA_FILE));
}
