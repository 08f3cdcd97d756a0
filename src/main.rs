use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pkgscope::config::{
    DEFAULT_LOCKFILE, DEFAULT_MANIFEST, DEFAULT_OUTPUT, DEFAULT_PACKAGE_LIST, DEFAULT_SOURCE_DIR,
};
use pkgscope::export::ExportFormat;
use pkgscope::logging::init_logging;
use pkgscope::{run_audit, AuditConfig, AuditOutcome};
use tracing::error;

#[derive(Parser)]
#[command(name = "pkgscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Check which packages of a list are used, unused, or not installed", long_about = None)]
struct Cli {
    /// Tab-separated package list (name<TAB>version per line)
    #[arg(default_value = DEFAULT_PACKAGE_LIST)]
    package_list: PathBuf,

    /// Source directory to scan for usage
    #[arg(default_value = DEFAULT_SOURCE_DIR)]
    source_dir: PathBuf,

    /// Report file to write
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Path to package.json
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Path to package-lock.json
    #[arg(long, default_value = DEFAULT_LOCKFILE)]
    lockfile: PathBuf,

    /// Report format: text, json or markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for AuditConfig {
    fn from(cli: Cli) -> Self {
        Self {
            package_list: cli.package_list,
            source_dir: cli.source_dir,
            output: cli.output,
            manifest: cli.manifest,
            lockfile: cli.lockfile,
            format: cli.format,
        }
    }
}

fn print_banner(config: &AuditConfig) {
    println!("{}", "=".repeat(80));
    println!("📦 Package Usage Checker");
    println!("{}", "=".repeat(80));
    println!("Package list: {}", config.package_list.display());
    println!("Source directory: {}", config.source_dir.display());
    println!("Output file: {}", config.output.display());
    println!();
}

fn print_summary(config: &AuditConfig, outcome: &AuditOutcome) {
    let report = &outcome.report;

    println!("Direct dependencies: {}", outcome.direct_dependency_count);
    println!("Installed packages: {}", outcome.installed_count);
    println!("\n{}", "=".repeat(80));
    println!("Analysis complete!");
    println!("{}", "=".repeat(80));
    println!("Total packages: {}", report.total);
    println!("✅ Used packages: {}", report.used.len());
    println!("⚠️  Installed but unused: {}", report.unused.len());
    println!("❌ Not installed: {}", report.not_installed.len());
    println!(
        "ℹ️  Installed but not in list: {}",
        report.installed_but_not_in_list.len()
    );
    println!("\nReport file: {}", config.output.display());
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AuditConfig::from(cli);
    print_banner(&config);

    match run_audit(&config) {
        Ok(outcome) => {
            print_summary(&config, &outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
