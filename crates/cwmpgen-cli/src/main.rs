use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cwmpgen_core::config::{self, CONFIG_FILE_NAME, CwmpgenConfig, TargetKind};
use cwmpgen_core::ir::DeviceModel;
use cwmpgen_core::{CodeGenerator, GeneratedFile, parse, source, transform};

use cwmpgen_cheader::{CHeaderConfig, CHeaderGenerator};
use cwmpgen_golang::{GolangConfig, GolangGenerator};
use cwmpgen_typescript::{TypeScriptConfig, TypeScriptGenerator};

#[derive(Parser)]
#[command(name = "cwmpgen", about = "CWMP data model code generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from a data model XML file or URL
    Generate {
        /// Path or URL of the data model XML
        #[arg(short, long)]
        input: Option<String>,

        /// Base output directory (one subdirectory per target)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Targets to generate (overrides the config file)
        #[arg(short, long, value_enum)]
        target: Vec<TargetArg>,
    },

    /// Validate a data model document
    Validate {
        /// Path or URL of the data model XML
        #[arg(short, long)]
        input: String,
    },

    /// Inspect the normalized model of a data model document
    Inspect {
        /// Path or URL of the data model XML
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new cwmpgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Golang,
    Typescript,
    CHeader,
}

impl From<TargetArg> for TargetKind {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Golang => TargetKind::Golang,
            TargetArg::Typescript => TargetKind::Typescript,
            TargetArg::CHeader => TargetKind::CHeader,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            target,
        } => cmd_generate(input, output, target),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "cwmpgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<CwmpgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Acquire, parse, and normalize a data model from a path or URL.
fn load_model(input: &str) -> Result<DeviceModel> {
    let bytes = source::load(input).with_context(|| format!("failed to acquire {input}"))?;
    let document =
        parse::from_bytes(&bytes).with_context(|| format!("failed to parse {input}"))?;
    let model = transform::normalize(&document)
        .with_context(|| format!("failed to normalize {input}"))?;
    log::debug!("loaded model '{}' from {input}", model.name.original);
    Ok(model)
}

/// Run one backend over the normalized model.
fn run_generator(
    target: TargetKind,
    model: &DeviceModel,
    cfg: &CwmpgenConfig,
) -> Result<Vec<GeneratedFile>> {
    let files = match target {
        TargetKind::Golang => {
            let config = GolangConfig {
                package: cfg.golang.package.clone(),
            };
            GolangGenerator.generate(model, &config)?
        }
        TargetKind::Typescript => {
            let config = TypeScriptConfig {
                no_jsdoc: cfg.typescript.no_jsdoc,
            };
            TypeScriptGenerator.generate(model, &config)?
        }
        TargetKind::CHeader => CHeaderGenerator.generate(model, &CHeaderConfig::default())?,
    };
    Ok(files)
}

/// Write generated files to disk under the given base directory.
///
/// Files are written sequentially; on failure the error names the file and
/// everything written so far stays on disk. Leaving partial output is the
/// intended policy: the returned list tells the caller exactly what exists,
/// and regeneration overwrites it anyway.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<Vec<String>> {
    let mut written = Vec::new();
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
        written.push(file.path.clone());
    }
    Ok(written)
}

fn cmd_generate(
    input: Option<String>,
    output: Option<PathBuf>,
    targets: Vec<TargetArg>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| cfg.input.clone());
    let output = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let targets: Vec<TargetKind> = if targets.is_empty() {
        cfg.targets.clone()
    } else {
        targets.into_iter().map(TargetKind::from).collect()
    };

    if targets.is_empty() {
        eprintln!("No targets configured. Add a `targets` section to your config.");
        return Ok(());
    }

    let model = load_model(&input)?;
    eprintln!(
        "Loaded model '{}' v{} ({} objects)",
        model.name.original,
        model.version,
        model.flattened_objects().len()
    );

    for target in targets {
        let target_dir = output.join(target.output_dir());
        eprintln!("Generating {target} → {}", target_dir.display());

        let files = run_generator(target, &model, &cfg)?;

        fs::create_dir_all(&target_dir).with_context(|| {
            format!("failed to create output directory {}", target_dir.display())
        })?;

        let written = write_files(&target_dir, &files)?;
        eprintln!("Generated {} files in {}", written.len(), target_dir.display());
    }

    Ok(())
}

fn cmd_validate(input: &str) -> Result<()> {
    let bytes = source::load(input).with_context(|| format!("failed to acquire {input}"))?;
    let document =
        parse::from_bytes(&bytes).with_context(|| format!("failed to parse {input}"))?;

    eprintln!("Valid data model document: {} model(s)", document.models.len());

    // Also validate that it normalizes successfully
    let model = transform::normalize(&document)?;
    eprintln!("  Model: {} v{}", model.name.original, model.version);
    eprintln!("  Objects: {}", model.flattened_objects().len());
    eprintln!("  Root parameters: {}", model.parameters.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &str, format: InspectFormat) -> Result<()> {
    let model = load_model(input)?;

    let summary = build_inspect_summary(&model);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(model: &DeviceModel) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = model
        .flattened_objects()
        .iter()
        .map(|obj| {
            serde_json::json!({
                "path": obj.path,
                "multi_instance": obj.multi_instance,
                "parameters": obj
                    .parameters
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "name": p.name.original,
                            "type": p.param_type.as_tag(),
                            "access": p.access,
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::json!({
        "model": {
            "name": model.name.original,
            "version": model.version,
        },
        "root_parameters": model
            .parameters
            .iter()
            .map(|p| &p.name.original)
            .collect::<Vec<_>>(),
        "objects": objects,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
