use dictpw::{cli::dictpw::run, TARGET};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dictpw=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!(target: TARGET, "{}", e);
        std::process::exit(1);
    }
}
