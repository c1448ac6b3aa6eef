//! Command-line interface implementation

use clap::{ArgGroup, Parser};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, CliOverrides};
use crate::export::{export, TemplateSource};
use crate::pipeline::{convert_all, expand_inputs};
use crate::templates::TemplateId;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// png2src - Convert indexed PNG sprites into packed 1bpp/2bpp byte arrays as source code
#[derive(Parser, Debug)]
#[command(name = "png2src")]
#[command(
    about = "png2src - Convert indexed PNG sprites into packed 1bpp/2bpp byte arrays as source code"
)]
#[command(version)]
#[command(group(
    ArgGroup::new("target")
        .args(["lang", "assemblyscript", "c", "d", "go", "nim", "odin", "rust", "zig"])
        .multiple(false)
))]
pub struct Cli {
    /// PNG files, or directories whose *.png files are converted in name order
    #[arg(required_unless_present = "list_targets")]
    pub inputs: Vec<PathBuf>,

    /// Output file, or '-' for stdout (default: '-')
    #[arg(short, long)]
    pub output: Option<String>,

    /// Custom mustache template file (overrides the target language)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Target language by name or alias
    #[arg(long, value_parser = parse_target)]
    pub lang: Option<TemplateId>,

    /// Emit AssemblyScript (default)
    #[arg(long = "as", visible_alias = "assemblyscript")]
    pub assemblyscript: bool,

    /// Emit C
    #[arg(long)]
    pub c: bool,

    /// Emit D
    #[arg(long)]
    pub d: bool,

    /// Emit Go
    #[arg(long)]
    pub go: bool,

    /// Emit Nim
    #[arg(long)]
    pub nim: bool,

    /// Emit Odin
    #[arg(long)]
    pub odin: bool,

    /// Emit Rust
    #[arg(long, visible_alias = "rs")]
    pub rust: bool,

    /// Emit Zig
    #[arg(long)]
    pub zig: bool,

    /// Config file (default: nearest png2src.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log each converted sprite
    #[arg(short, long)]
    pub verbose: bool,

    /// List built-in targets and exit
    #[arg(long)]
    pub list_targets: bool,
}

fn parse_target(s: &str) -> Result<TemplateId, String> {
    TemplateId::from_alias(s).ok_or_else(|| {
        format!(
            "unknown target '{}', expected one of: as, {}",
            s,
            TemplateId::ALL.map(|id| id.name()).join(", ")
        )
    })
}

impl Cli {
    /// The target named on the command line, if any. At most one can be set.
    pub fn selected_target(&self) -> Option<TemplateId> {
        let flags = [
            (self.assemblyscript, TemplateId::AssemblyScript),
            (self.c, TemplateId::C),
            (self.d, TemplateId::D),
            (self.go, TemplateId::Go),
            (self.nim, TemplateId::Nim),
            (self.odin, TemplateId::Odin),
            (self.rust, TemplateId::Rust),
            (self.zig, TemplateId::Zig),
        ];
        self.lang.or_else(|| flags.iter().find(|(set, _)| *set).map(|(_, id)| *id))
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            lang: self.selected_target(),
            template: self.template.clone(),
            output: self.output.clone(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_targets {
        for id in TemplateId::ALL {
            println!("{:<16}{}", id.name(), id.description());
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    run_convert(&cli)
}

/// Convert the inputs and emit them with the configured template
fn run_convert(cli: &Cli) -> ExitCode {
    let config = match load_config(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let template = match &config.emit.template {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => TemplateSource::Custom(text),
            Err(e) => {
                eprintln!("Error: Cannot read template '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => TemplateSource::Builtin(config.target()),
    };

    let files = expand_inputs(&cli.inputs);
    if files.is_empty() {
        eprintln!("Error: No PNG files found in input");
        return ExitCode::from(EXIT_ERROR);
    }

    let sprites = match convert_all(&files) {
        Ok(sprites) => sprites,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let target = config.output_target();
    if let Err(e) = export(&sprites, &template, &target) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}
