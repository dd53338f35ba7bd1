use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filebundle_core::constants::{MANIFEST_ENV_VAR, OUTPUT_ENV_VAR};
use filebundle_core::{BundleConfig, BundleService, resolve_output_path, resolve_sources};

/// Entry point for unattended bundling
///
/// Reads the source list from a manifest file and writes the bundle to the
/// configured output, then prints a one-line completion message. Unreadable
/// sources are embedded in the bundle and do not change the exit status.
///
/// # Environment Variables
/// - `FILEBUNDLE_MANIFEST`: manifest file with one source path per line (required)
/// - `FILEBUNDLE_OUTPUT`: bundle output file (default: "output.txt")
///
/// # Returns
/// * `Ok(())` - If the bundle was written
/// * `Err(anyhow::Error)` - If configuration is missing or the output cannot be written
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("filebundle=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let manifest = std::env::var(MANIFEST_ENV_VAR)
        .map_err(|_| anyhow::anyhow!("{MANIFEST_ENV_VAR} must be set to a manifest file"))?;
    let output = resolve_output_path(std::env::var(OUTPUT_ENV_VAR).ok());

    tracing::info!("++ Bundling sources from {}", manifest);

    let sources = resolve_sources(Vec::new(), Some(std::path::Path::new(&manifest)))?;
    let config = BundleConfig::new(sources, output)?;
    let service = BundleService::new(config);
    let report = service.run()?;

    if report.files_failed() > 0 {
        tracing::warn!(
            failed = report.files_failed(),
            "some sources could not be read"
        );
    }

    println!("Data saved to {}", service.config().output_path().display());

    Ok(())
}
