//! Launch parameter parsing for the inspector.

use std::path::PathBuf;

use clap::Parser;

/// Default surface kind for `--subject`.
const DEFAULT_KIND: &str = "white";

/// What the inspector should load and how to report it.
#[derive(Debug, Default)]
pub struct LaunchParams {
    /// Surface files to decode.
    pub surfaces: Vec<PathBuf>,
    /// Curvature files to decode on their own.
    pub curvatures: Vec<PathBuf>,
    /// Also load `<hemi>.curv` next to each surface.
    pub with_curvature: bool,
    /// Subject surface directory to load as a left/right pair.
    pub subject: Option<PathBuf>,
    /// Surface kind to load from `subject`.
    pub kind: String,
    /// Print one JSON document instead of text.
    pub json: bool,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: &'static str,
}

impl LaunchParams {
    /// Whether nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty() && self.curvatures.is_empty() && self.subject.is_none()
    }
}

#[derive(Parser)]
#[command(about = "Inspect legacy binary cortical surface and curvature files")]
struct CliArgs {
    /// Surface files to decode (e.g. `surf/lh.white`).
    surfaces: Vec<PathBuf>,

    /// Curvature file to decode; may be repeated.
    #[arg(long = "curv", value_name = "PATH")]
    curvatures: Vec<PathBuf>,

    /// Also load the companion `<hemi>.curv` file for each surface.
    #[arg(long)]
    with_curvature: bool,

    /// Load `lh.<kind>` and `rh.<kind>` from this directory.
    #[arg(long, value_name = "DIR")]
    subject: Option<PathBuf>,

    /// Surface kind used with `--subject`.
    #[arg(long, default_value = DEFAULT_KIND, requires = "subject")]
    kind: String,

    /// Print a JSON summary.
    #[arg(long)]
    json: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl From<CliArgs> for LaunchParams {
    fn from(args: CliArgs) -> Self {
        Self {
            surfaces: args.surfaces,
            curvatures: args.curvatures,
            with_curvature: args.with_curvature,
            subject: args.subject,
            kind: args.kind,
            json: args.json,
            log_level: if args.verbose { "debug" } else { "info" },
        }
    }
}

/// Parse launch parameters from the command line.
pub fn parse() -> LaunchParams {
    CliArgs::parse().into()
}
