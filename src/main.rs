//! embedsmith's main application entry point.
//! Handles command-line argument parsing, configuration resolution,
//! and reporting around the generator.

use embedsmith::{
    cli::{get_args, presets_listing, Args},
    error::{default_error_handler, install_interrupt_handler, Result},
    generator::Generator,
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::SafeSubstitutionRenderer,
    templates::{DirectoryTemplates, EmbeddedTemplates, TemplateResolver, TemplateStore},
};

const PROJECT_STRUCTURE: &str = "\
Project Structure:
├── firmware/
│   ├── src/                 # Source files
│   ├── include/             # Header files
│   ├── linker_scripts/      # Memory configuration
│   ├── drivers/             # Hardware drivers
│   └── build/               # Build artifacts
├── tools/
│   ├── scripts/             # Flash/debug scripts
│   ├── configs/             # Tool configurations
│   └── utilities/           # Analysis tools
├── tests/
│   ├── unit/                # Unit tests
│   └── integration/         # Hardware tests
├── docs/
│   ├── api/                 # API documentation
│   └── hardware/            # Hardware docs
├── hardware/
│   ├── schematics/          # Circuit diagrams
│   ├── pcb/                 # PCB layouts
│   └── 3d_models/           # Mechanical models
├── scripts/                 # Build/deploy scripts
├── config/                  # Project configuration
├── utils/                   # Utility functions
├── embedsmith.json          # Project metadata
└── project_guide.md         # Development guide";

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose, args.quiet);

    if let Err(err) = install_interrupt_handler() {
        default_error_handler(err);
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn load_store(args: &Args) -> Result<Box<dyn TemplateStore>> {
    let store: Box<dyn TemplateStore> = match &args.templates {
        Some(dir) => {
            let store = DirectoryTemplates::load(dir)?;
            log::debug!("Using templates from {}", store.root().display());
            Box::new(store)
        }
        None => Box::new(EmbeddedTemplates::new()),
    };
    Ok(store)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Handles the listing flags, which generate nothing
/// 2. Resolves the configuration
/// 3. Runs the generator against the project path
/// 4. Prints the project overview and next steps
fn run(args: Args) -> Result<()> {
    if args.list_presets {
        print!("{}", presets_listing());
        return Ok(());
    }

    let store = load_store(&args)?;
    if args.list_templates {
        for template_id in store.list_available() {
            println!("{template_id}");
        }
        return Ok(());
    }

    let config = args.resolve_config()?;
    let renderer = SafeSubstitutionRenderer::new();
    let resolver = TemplateResolver::new(&*store, &renderer);
    let prompt = DialoguerPrompter::new();
    let generator = Generator::new(&resolver, &prompt, args.overwrite);

    log::info!("Crafting embedded project at: {}/", args.project_path.display());
    log::info!("Project: {}", config.project_name);
    log::info!("MCU: {}", config.mcu);
    log::info!("Flash: {}, RAM: {}", config.flash_size, config.ram_size);

    let report = generator.generate(&args.project_path, &config)?;

    if !args.quiet {
        println!();
        println!("{PROJECT_STRUCTURE}");
        println!();
        println!(
            "Successfully crafted '{}' at '{}' ({} directories, {} files).",
            config.project_name,
            report.base_path.display(),
            report.directories,
            report.files
        );
        println!("Next steps:");
        println!("   cd {}/firmware", report.base_path.display());
        println!("   make                        # Build the project");
        println!("   make flash                  # Flash to device");
    }
    Ok(())
}
