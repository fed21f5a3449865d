mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use config::{CONFIG_FILE_NAME, OutputFormat, WotConfig};
use wot_openapi::td::{self, ThingDescription};
use wot_openapi::{Conversion, to_openapi};

#[derive(Parser)]
#[command(name = "wot", about = "Web of Things Thing Description tooling", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a Thing Description into an OpenAPI 3.0 document
    Openapi {
        /// Path to the Thing Description (JSON or YAML)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write openapi.yaml / openapi.json into (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which renderings to produce
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Reconcile the assertion tables and write the manual-testing reports
    Assertions {
        /// Directory holding assertions.csv and manual-generation-inputs/
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Initialize a new wot configuration
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

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Openapi {
            input,
            output,
            format,
        } => cmd_openapi(input, output, format),

        Commands::Assertions { dir } => cmd_assertions(dir),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "wot", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<WotConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let loaded = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    if loaded.is_some() {
        log::debug!("loaded config from {}", config_path.display());
    }
    Ok(loaded)
}

fn load_td(path: &Path) -> Result<ThingDescription> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let td = match ext {
        "yaml" | "yml" => td::from_yaml(&content)?,
        _ => td::from_json(&content)?,
    };
    Ok(td)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("  wrote {}", path.display());
    Ok(())
}

fn write_conversion(dir: &Path, conversion: &Conversion, format: OutputFormat) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    if format.includes_yaml() {
        write_file(&dir.join("openapi.yaml"), &conversion.yaml)?;
    }
    if format.includes_json() {
        let json = serde_json::to_string_pretty(&conversion.json)?;
        write_file(&dir.join("openapi.json"), &json)?;
    }
    Ok(())
}

fn cmd_openapi(
    input: PathBuf,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let format = format.unwrap_or(cfg.openapi.format);
    let output = output.or_else(|| cfg.openapi.output.map(PathBuf::from));

    let td = load_td(&input)?;
    let conversion = to_openapi(&td)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    match output {
        Some(dir) => {
            eprintln!("Converting {} → {}", input.display(), dir.display());
            write_conversion(&dir, &conversion, format)?;
            eprintln!(
                "Generated OpenAPI {} document with {} paths",
                conversion.json.openapi,
                conversion.json.paths.len()
            );
        }
        None => print!("{}", render_stdout(&conversion, format)?),
    }
    Ok(())
}

/// Rendering printed when no output directory is given. `Both` falls back to YAML.
fn render_stdout(conversion: &Conversion, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        Ok(serde_json::to_string_pretty(&conversion.json)? + "\n")
    } else {
        Ok(conversion.yaml.clone())
    }
}

fn cmd_assertions(dir: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let paths = cfg.assertions.paths(dir.as_deref());

    eprintln!(
        "Reconciling {} against {}",
        paths.assertions.display(),
        paths.pre_implemented.display()
    );
    let report = wot_assertions::run(&paths, &cfg.assertions.manual_flag)?;

    eprintln!("  assertions:   {}", report.assertions_size);
    eprintln!("  implemented:  {}", report.implemented_size);
    eprintln!("  manual:       {}", report.manual_size);
    eprintln!("  needs review: {}", report.needs_review_size);
    eprintln!("  old:          {}", report.old_size);
    eprintln!("Reports written to {}", paths.output_dir.display());
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Conversion {
        let td = td::from_json(
            r#"{"title": "Lamp", "properties": {"on": {"forms": [{"href": "http://lamp.test/on"}]}}}"#,
        )
        .unwrap();
        to_openapi(&td).unwrap()
    }

    #[test]
    fn test_write_conversion_yaml_only() {
        let dir = tempfile::tempdir().unwrap();
        write_conversion(dir.path(), &lamp(), OutputFormat::Yaml).unwrap();

        let yaml = fs::read_to_string(dir.path().join("openapi.yaml")).unwrap();
        assert!(yaml.contains("title: Lamp"));
        assert!(!dir.path().join("openapi.json").exists());
    }

    #[test]
    fn test_write_conversion_json_only() {
        let dir = tempfile::tempdir().unwrap();
        write_conversion(dir.path(), &lamp(), OutputFormat::Json).unwrap();

        let json = fs::read_to_string(dir.path().join("openapi.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["title"], "Lamp");
        assert!(!dir.path().join("openapi.yaml").exists());
    }

    #[test]
    fn test_write_conversion_both_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");
        let conversion = lamp();
        write_conversion(&out, &conversion, OutputFormat::Both).unwrap();

        let yaml = fs::read_to_string(out.join("openapi.yaml")).unwrap();
        let json = fs::read_to_string(out.join("openapi.json")).unwrap();
        assert_eq!(yaml, conversion.yaml);
        let from_yaml: serde_json::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        let from_json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(from_yaml, from_json);
    }

    #[test]
    fn test_render_stdout() {
        let conversion = lamp();

        let json = render_stdout(&conversion, OutputFormat::Json).unwrap();
        assert!(json.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["paths"]["/on"]["get"]["tags"][0], "property");

        assert_eq!(render_stdout(&conversion, OutputFormat::Yaml).unwrap(), conversion.yaml);
        assert_eq!(render_stdout(&conversion, OutputFormat::Both).unwrap(), conversion.yaml);
    }
}
