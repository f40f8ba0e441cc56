//! CLI entry point for distkit.
//!
//! This module is thin: it handles argument parsing, logging setup, and exit
//! codes. All behavior lives in the `distkit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand};
use distkit_app::{
    IconsInput, LicensesInput, explain_config, load_config, read_config_text, rooted, run_icons,
    run_licenses,
};
use distkit_settings::Overrides;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "distkit",
    version,
    about = "Build-support tooling: procedural app icons and third-party license notices"
)]
struct Cli {
    /// Repository root; relative paths in config and flags resolve against it.
    #[arg(long, global = true, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the distkit config TOML, relative to the repo root.
    #[arg(long, global = true, default_value = "distkit.toml")]
    config: Utf8PathBuf,

    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the brand glyph and write icon.png, icon.icns, icon.ico, and tray templates.
    Icons {
        /// Output directory for icon assets.
        #[arg(long)]
        assets_dir: Option<Utf8PathBuf>,

        /// ICNS packager program (invoked as `<program> -c icns <iconset> -o <out>`).
        #[arg(long)]
        packager: Option<String>,
    },

    /// Write the third-party license notice for Rust and Node dependencies.
    Licenses {
        /// Where to write the notice.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Directory to run `cargo metadata` in.
        #[arg(long)]
        app_dir: Option<Utf8PathBuf>,

        /// Directory holding package.json and node_modules.
        #[arg(long)]
        node_root: Option<Utf8PathBuf>,

        /// Read captured `cargo metadata --format-version=1` output instead of running cargo.
        #[arg(long)]
        cargo_metadata: Option<Utf8PathBuf>,
    },

    /// Print the effective configuration as JSON.
    ExplainConfig,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    tracing::debug!(command = ?cli.cmd, repo_root = %cli.repo_root, "starting");

    let result = match &cli.cmd {
        Commands::Icons {
            assets_dir,
            packager,
        } => cmd_icons(
            &cli,
            Overrides {
                assets_dir: assets_dir.clone(),
                packager: packager.clone(),
                ..Overrides::default()
            },
        ),
        Commands::Licenses {
            out,
            app_dir,
            node_root,
            cargo_metadata,
        } => cmd_licenses(
            &cli,
            Overrides {
                output: out.clone(),
                app_dir: app_dir.clone(),
                node_root: node_root.clone(),
                cargo_metadata: cargo_metadata.clone(),
                ..Overrides::default()
            },
        ),
        Commands::ExplainConfig => cmd_explain_config(&cli),
    };

    if let Err(err) = result {
        eprintln!("distkit error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn config_text(cli: &Cli) -> anyhow::Result<String> {
    read_config_text(&rooted(&cli.repo_root, &cli.config))
}

fn print_ok(path: &Utf8Path) {
    println!("OK: {path}");
}

fn cmd_icons(cli: &Cli, overrides: Overrides) -> anyhow::Result<()> {
    let resolved = load_config(&config_text(cli)?, overrides)?;
    let outputs = run_icons(IconsInput {
        repo_root: &cli.repo_root,
        settings: &resolved.icons,
    })?;
    for path in outputs.paths() {
        print_ok(path);
    }
    Ok(())
}

fn cmd_licenses(cli: &Cli, overrides: Overrides) -> anyhow::Result<()> {
    let output = run_licenses(LicensesInput {
        repo_root: &cli.repo_root,
        config_text: config_text(cli),
        overrides,
    })?;
    print_ok(&output.path);
    Ok(())
}

fn cmd_explain_config(cli: &Cli) -> anyhow::Result<()> {
    let resolved = load_config(&config_text(cli)?, Overrides::default())?;
    let json = serde_json::to_string_pretty(&explain_config(&cli.repo_root, &resolved))
        .context("serialize config")?;
    println!("{json}");
    Ok(())
}
