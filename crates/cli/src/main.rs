use clap::{Parser, Subcommand};
use filebundle_core::{
    load_manifest, resolve_output_path, resolve_sources, stream_bundle, BundleConfig,
    BundleReport, BundleService, CoreResult,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filebundle")]
#[command(about = "Bundle source files into a single document")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a bundle to an output file
    Bundle {
        /// Source paths, appended after any manifest entries
        paths: Vec<String>,
        /// Output file (defaults to output.txt)
        #[arg(short, long)]
        output: Option<String>,
        /// Manifest file listing one source path per line
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a bundle to standard output
    Print {
        /// Source paths, appended after any manifest entries
        paths: Vec<String>,
        /// Manifest file listing one source path per line
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
    /// List the entries of a manifest
    Manifest {
        /// Manifest file
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bundle {
            paths,
            output,
            manifest,
            json,
        }) => match bundle(paths, output, manifest) {
            Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
            Ok(report) => print_summary(&report),
            Err(e) => {
                eprintln!("Error bundling files: {}", e);
                std::process::exit(1);
            }
        },
        Some(Commands::Print { paths, manifest }) => {
            if let Err(e) = print_bundle(paths, manifest) {
                eprintln!("Error bundling files: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Manifest { file }) => match load_manifest(&file) {
            Ok(entries) if entries.is_empty() => println!("No entries found."),
            Ok(entries) => {
                for entry in entries {
                    println!("{}", entry);
                }
            }
            Err(e) => {
                eprintln!("Error reading manifest: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("Use 'filebundle --help' for commands");
        }
    }

    Ok(())
}

fn bundle(
    paths: Vec<String>,
    output: Option<String>,
    manifest: Option<PathBuf>,
) -> CoreResult<BundleReport> {
    let sources = resolve_sources(paths, manifest.as_deref())?;
    let config = BundleConfig::new(sources, resolve_output_path(output))?;
    BundleService::new(config).run()
}

fn print_bundle(paths: Vec<String>, manifest: Option<PathBuf>) -> CoreResult<BundleReport> {
    let sources = resolve_sources(paths, manifest.as_deref())?;
    stream_bundle(&sources, std::io::stdout().lock())
}

fn print_summary(report: &BundleReport) {
    if let Some(output) = &report.output {
        println!("Data saved to {}", output.display());
    }
    println!(
        "{} file(s) read, {} failed",
        report.files_read(),
        report.files_failed()
    );
    for entry in report.entries.iter().filter(|e| !e.is_read()) {
        println!("  failed: {}", entry.path);
    }
}
