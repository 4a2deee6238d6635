use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use jsp_core::Emitter;
use jsp_core::config::{self, CONFIG_FILE_NAME, JspConfig};
use jsp_core::ir::{Message, Subtype};
use jsp_core::parse::{self, schema::SchemaDocument};
use jsp_core::transform::{self, BuildOptions};
use jsp_proto::ProtoEmitter;

#[derive(Parser)]
#[command(
    name = "jsonschema2proto",
    about = "Convert a JSON Schema document into a proto3 schema",
    version
)]
struct Cli {
    /// Log resolution and build steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON Schema file into a .proto file
    Generate {
        /// Path to the JSON Schema file (JSON or YAML)
        schema: Option<PathBuf>,

        /// Path of the generated .proto file, `-` for stdout
        output: Option<String>,

        /// Name of the root message type
        #[arg(long)]
        root_name: Option<String>,
    },

    /// Print the message tree built from a JSON Schema file
    Inspect {
        /// Path to the JSON Schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Name of the root message type
        #[arg(long)]
        root_name: Option<String>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new jsp configuration
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

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            schema,
            output,
            root_name,
        } => cmd_generate(schema, output, root_name),

        Commands::Inspect {
            input,
            root_name,
            format,
        } => cmd_inspect(input, root_name, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "jsonschema2proto", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<JspConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let loaded = config::load_config(&config_path)?;
    Ok(loaded)
}

fn load_document(path: &Path) -> Result<SchemaDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let document = match ext {
        "yaml" | "yml" => parse::from_yaml(&content),
        _ => parse::from_json(&content),
    }
    .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(document)
}

fn build_message(path: &Path, root_name: &str, cfg: &JspConfig) -> Result<Message> {
    let document = load_document(path)?;
    let options = BuildOptions {
        naming: cfg.naming,
    };
    let message = transform::build_with_options(root_name, &document, &options)
        .with_context(|| format!("failed to convert {}", path.display()))?;
    Ok(message)
}

fn cmd_generate(
    schema: Option<PathBuf>,
    output: Option<String>,
    root_name: Option<String>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = schema.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = output.unwrap_or_else(|| cfg.output.clone());
    let root_name = root_name.unwrap_or_else(|| cfg.root_name.clone());

    let message = build_message(&input, &root_name, &cfg)?;
    let content = ProtoEmitter.emit(&message)?;

    if output == "-" {
        std::io::stdout()
            .write_all(content.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(());
    }

    let output_path = PathBuf::from(&output);
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output_path, &content)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    eprintln!(
        "Generated {} from {} (root message {})",
        output_path.display(),
        input.display(),
        root_name
    );
    Ok(())
}

fn cmd_inspect(input: PathBuf, root_name: Option<String>, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let root_name = root_name.unwrap_or_else(|| cfg.root_name.clone());
    let message = build_message(&input, &root_name, &cfg)?;

    let summary = build_inspect_summary(&message);

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

fn build_inspect_summary(message: &Message) -> serde_json::Value {
    let fields: Vec<serde_json::Value> = message
        .numbered_fields()
        .map(|(number, field)| {
            serde_json::json!({
                "number": number,
                "name": field.name,
                "type": field.field_type.to_string(),
                "repeated": field.repeated,
            })
        })
        .collect();

    let subtypes: Vec<serde_json::Value> = message
        .subtypes
        .iter()
        .map(|subtype| match subtype {
            Subtype::Message(m) => build_inspect_summary(m),
            Subtype::Enum(e) => serde_json::json!({
                "kind": "enum",
                "name": e.name,
                "values": e.values,
            }),
        })
        .collect();

    serde_json::json!({
        "kind": "message",
        "name": message.name,
        "fields": fields,
        "subtypes": subtypes,
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
