use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use zip::result::ZipResult;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const LAMBDA_PACKAGE: &str = "button_lambda";
const LAMBDA_BINARY: &str = "button_lambda";
const DIST_DIR: &str = "dist";
/// Entry name the Lambda custom runtime executes.
const BOOTSTRAP: &str = "bootstrap";

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the up-before-nine button workspace"
)]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Formatting, clippy with warnings denied, and the workspace tests
    Ci,
    /// Build the button Lambda and zip it as `dist/button_lambda.zip`
    ServerlessPackage {
        /// Target triple of the Lambda host
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        #[arg(value_enum, long, default_value_t = Profile::Release)]
        profile: Profile,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Debug,
    Release,
}

/// Where cargo leaves the Lambda binary for a target and profile.
fn built_binary(target: &str, profile: Profile) -> PathBuf {
    let profile_dir = match profile {
        Profile::Debug => "debug",
        Profile::Release => "release",
    };
    let file_name = if target.contains("windows") {
        format!("{LAMBDA_BINARY}.exe")
    } else {
        LAMBDA_BINARY.to_string()
    };
    Path::new("target")
        .join(target)
        .join(profile_dir)
        .join(file_name)
}

fn cargo(label: &str, args: &[&str]) -> Result<(), String> {
    eprintln!("\n=== {label} ===\n+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(args)
        .status()
        .map_err(|error| format!("could not start cargo: {error}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("`cargo {}` exited with {status}", args.join(" ")))
    }
}

fn ci() -> Result<(), String> {
    cargo("Check formatting", &["fmt", "--all", "--", "--check"])?;
    cargo(
        "Clippy",
        &["clippy", "--all-targets", "--", "-D", "warnings"],
    )?;
    cargo("Test workspace", &["test", "--workspace"])
}

fn serverless_package(target: &str, profile: Profile) -> Result<PathBuf, String> {
    let mut args = vec![
        "build",
        "-p",
        LAMBDA_PACKAGE,
        "--bin",
        LAMBDA_BINARY,
        "--target",
        target,
    ];
    if let Profile::Release = profile {
        args.push("--release");
    }
    cargo("Build button lambda", &args)?;

    fs::create_dir_all(DIST_DIR)
        .map_err(|error| format!("could not create {DIST_DIR}: {error}"))?;
    let archive = Path::new(DIST_DIR).join(format!("{LAMBDA_BINARY}.zip"));
    write_bootstrap_zip(&built_binary(target, profile), &archive)?;
    Ok(archive)
}

/// Zip `binary` as an executable `bootstrap` entry.
fn write_bootstrap_zip(binary: &Path, archive: &Path) -> Result<(), String> {
    let bytes = fs::read(binary)
        .map_err(|error| format!("could not read '{}': {error}", binary.display()))?;
    let file = File::create(archive)
        .map_err(|error| format!("could not create '{}': {error}", archive.display()))?;

    zip_bootstrap(file, &bytes)
        .map_err(|error| format!("could not write '{}': {error}", archive.display()))
}

fn zip_bootstrap(file: File, bytes: &[u8]) -> ZipResult<()> {
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file(BOOTSTRAP, options)?;
    zip.write_all(bytes)?;
    zip.finish()?;
    Ok(())
}

fn main() -> ExitCode {
    let result = match Cli::parse().command {
        Task::Ci => ci().map(|()| eprintln!("\nCI passed.")),
        Task::ServerlessPackage { target, profile } => serverless_package(&target, profile)
            .map(|archive| eprintln!("\nPackaged {}", archive.display())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
