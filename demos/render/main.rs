//! Renders a Pythagoras tree to an image file.
//!
//! Usage:
//! ```text
//! cargo run --example render                      # writes tree.png, depth 12
//! cargo run --example render -- out.png 14        # custom path and depth
//! cargo run --example render -- out.png 10 30     # lopsided 30° caps
//! ```

use std::process::ExitCode;

use pythagoras::{GenerateParams, TreeConfig, TreeFractal};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for pythagoras.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pythagoras=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("pythagoras=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "tree.png".to_owned());
    let mut params = GenerateParams::default();
    if let Some(depth) = args.next().and_then(|s| s.parse().ok()) {
        params = params.with_depth(depth);
    }
    if let Some(angle) = args.next().and_then(|s| s.parse().ok()) {
        params = params.with_angle(angle, false);
    }

    let result = TreeFractal::new(TreeConfig::default()).and_then(|mut tree| {
        tree.generate(&params)?;
        tree.save(&path)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
