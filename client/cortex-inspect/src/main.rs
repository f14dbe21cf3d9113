//! Command-line inspector for legacy cortical surface files.
//!
//! Decodes surfaces and curvature maps and prints what was found, either as
//! text or as a JSON document.

mod params;
mod summary;

use std::process::ExitCode;

use cortex::{Surface, SurfaceSet, read_curvature};
use params::LaunchParams;
use summary::{CurvatureSummary, Report, SurfaceSummary};

/// Load everything requested in `params`.
fn run(params: &LaunchParams) -> cortex::Result<Report> {
    let mut report = Report::default();

    for path in &params.surfaces {
        let surface = if params.with_curvature {
            Surface::read_with_curvature(path)?
        } else {
            Surface::read(path)?
        };
        report.surfaces.push(SurfaceSummary::new(&surface));
    }

    if let Some(dir) = &params.subject {
        let set = SurfaceSet::read_subject(dir, &params.kind)?;
        report.surfaces.extend(set.iter().map(SurfaceSummary::new));
    }

    for path in &params.curvatures {
        let curvature = read_curvature(path)?;
        report
            .curvatures
            .push(CurvatureSummary::new(&curvature, Some(path.as_path())));
    }

    Ok(report)
}

fn main() -> ExitCode {
    let params = params::parse();

    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(params.log_level)),
            )
            .init();
    }

    if params.is_empty() {
        tracing::warn!("nothing to inspect; pass surface files, --curv or --subject");
        return ExitCode::FAILURE;
    }

    let report = match run(&params) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if params.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    ExitCode::SUCCESS
}
