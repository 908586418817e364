//! Rounded cube generator entry point
//!
//! Usage: `rcube <config.ron | -> [output.stl]`
//!
//! Log output is filtered by `RUST_LOG`. This binary logs under the `rcube`
//! target, the library under `rcube_core`.

use std::path::PathBuf;
use std::process::ExitCode;

use rcube_core::{RoundedCubeConfig, Submesh, generate_from_config, save_stl, topology};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "rcube=info,rcube_core=info";

struct Args {
    /// `None` selects the default configuration
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let config = match args.next().as_deref() {
        None => return Err("missing config path (use '-' for the default)".to_string()),
        Some("-") => None,
        Some(path) => Some(PathBuf::from(path)),
    };
    let output = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument '{}'", extra));
    }
    Ok(Args { config, output })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            RoundedCubeConfig::load(path)?
        }
        None => RoundedCubeConfig::default(),
    };

    let mesh = generate_from_config(&config)?;
    let report = topology::check(&mesh)?;

    tracing::info!(
        "{}: {}x{}x{} roundness {}, {} vertices, {} edges, {} triangles (euler {})",
        mesh.name,
        config.resolution.x,
        config.resolution.y,
        config.resolution.z,
        config.roundness,
        report.vertices,
        report.edges,
        report.triangles,
        report.euler
    );
    for (submesh, list) in mesh.submeshes() {
        let label = match submesh {
            Submesh::FacingZ => "facing z",
            Submesh::FacingX => "facing x",
            Submesh::FacingY => "facing y",
        };
        tracing::info!("  submesh {} ({}): {} indices", submesh.slot(), label, list.len());
    }

    if let Some(output) = &args.output {
        save_stl(&mesh, output)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("usage: rcube <config.ron | -> [output.stl]");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_binary_target() {
        // Events from main.rs carry the crate name of the binary
        let target = module_path!().split("::").next().unwrap();
        assert_eq!(target, "rcube");

        let directives: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();
        assert!(directives.contains(&format!("{target}=info").as_str()));
        assert!(directives.contains(&"rcube_core=info"));
    }
}
