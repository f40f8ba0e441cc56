//! Developer tasks (config schema generation and sample config checks).
//!
//! Kept separate from the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

const CONFIG_SCHEMA_FILE: &str = "distkit.config.v1.json";
const SAMPLE_CONFIG_FILE: &str = "distkit.example.toml";

/// Workspace root: the parent of the xtask manifest directory.
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .context("xtask directory has no parent")
    } else {
        Ok(manifest_dir)
    }
}

fn config_schema_path() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas").join(CONFIG_SCHEMA_FILE))
}

fn config_schema() -> schemars::Schema {
    schema_for!(distkit_settings::DistkitConfigV1)
}

/// Pretty JSON with a trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let path = config_schema_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create schemas directory {}", dir.display()))?;
    }

    let json = serialize_schema(&config_schema())?;
    fs::write(&path, json).with_context(|| format!("write schema to {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Fail when the checked-in schema differs from the generated one (compared as JSON values).
fn validate_schemas() -> anyhow::Result<()> {
    let path = config_schema_path()?;
    if !path.exists() {
        eprintln!("Missing schema: {}", path.display());
        eprintln!("\nRun `cargo xtask emit-schemas` to generate it.");
        bail!("schema validation failed");
    }

    let expected = serde_json::to_value(config_schema()).context("schema to JSON")?;
    let text = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let actual: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))?;
    if expected != actual {
        eprintln!("Schema out of date: {CONFIG_SCHEMA_FILE}");
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("schema validation failed");
    }

    println!("Config schema is up to date.");
    Ok(())
}

/// Validate the sample config against the generated schema and the resolver.
fn check_sample_config() -> anyhow::Result<()> {
    let path = project_root()?.join(SAMPLE_CONFIG_FILE);
    let text = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;

    let as_toml: toml::Value =
        toml::from_str(&text).with_context(|| format!("parse {SAMPLE_CONFIG_FILE} as TOML"))?;
    let instance = serde_json::to_value(&as_toml).context("convert sample config to JSON")?;

    let schema_value = serde_json::to_value(config_schema()).context("schema to JSON")?;
    let validator = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("compile config schema: {e}"))?;

    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("{SAMPLE_CONFIG_FILE} does not match the config schema");
    }

    let cfg = distkit_settings::parse_config_toml(&text)?;
    distkit_settings::resolve_config(cfg, distkit_settings::Overrides::default())
        .with_context(|| format!("resolve {SAMPLE_CONFIG_FILE}"))?;

    println!("{SAMPLE_CONFIG_FILE} is valid.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                 Show this message");
    eprintln!("  emit-schemas         Generate schemas/{CONFIG_SCHEMA_FILE} from the settings model");
    eprintln!("  validate-schemas     Check that schemas/ matches generated output (for CI)");
    eprintln!("  check-sample-config  Validate {SAMPLE_CONFIG_FILE} against the schema and resolver");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(String::as_str).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "check-sample-config" => check_sample_config(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
