use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use pwaicons::types::GenerationReport;
use pwaicons::{GeneratorParams, generate_icons};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (e.g. under the test harness).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Merge the optional config file with explicit flags; flags win.
fn resolve_params(args: &CliArgs) -> Result<GeneratorParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            GeneratorParams::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => GeneratorParams::default(),
    };

    if let Some(input) = &args.input {
        params.source = input.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_dir = output_dir.clone();
    }
    if args.manifest {
        params.manifest = true;
    }

    Ok(params)
}

/// Run the generator, logging any failure instead of propagating it.
fn generate_and_report(params: &GeneratorParams) -> Option<GenerationReport> {
    match generate_icons(params) {
        Ok(report) => {
            debug!(
                "Wrote {} icons to {:?}",
                report.icons.len(),
                report.output_dir
            );
            Some(report)
        }
        Err(e) => {
            error!("Error generating icons: {}", e);
            None
        }
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = resolve_params(&args)?;
    info!("Generating icons from {:?}", params.source);
    generate_and_report(&params);

    Ok(())
}
