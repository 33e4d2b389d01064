//! Build automation tasks for the Stepping Stone editor
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM for web deployment
//!   cargo xtask package-itch    # Create zip for itch.io upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const CRATE_NAME: &str = "stepstone-editor";
const WASM_FILE: &str = "stepstone_editor.wasm";
const MACROQUAD_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

/// Files served next to the wasm binary
const WEB_FILES: [&str; 2] = ["index.html", "stepstone_io.js"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the Stepping Stone editor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageItch => package_itch(),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "-p", CRATE_NAME]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(WASM_FILE),
        dist.join(WASM_FILE),
    )
    .with_context(|| format!("missing {}", WASM_FILE))?;

    let docs = root.join("docs");
    for file in WEB_FILES {
        let src = docs.join(file);
        if src.exists() {
            std::fs::copy(&src, dist.join(file))?;
        }
    }

    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(MACROQUAD_BUNDLE, &mq_js)?;
    }

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>Stepping Stone", "<title>[DEV] Stepping Stone");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", CRATE_NAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .arg("-r")
            .arg(format!("../{}", zip_name))
            .arg("."),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}
