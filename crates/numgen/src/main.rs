//! numgen: prints seeded pseudo-random numbers until stopped.

use numgen_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing; stdout is reserved for values. RUST_LOG, when
    // set, replaces the level picked by -v/-q.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(errors::exit_code(&e));
        }
    }
}
