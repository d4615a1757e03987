use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `level` is an `EnvFilter` directive such as
/// `info` or `sarovar_chat=debug,info`; invalid directives fall back to `info`.
/// Records emitted through the `log` crate are forwarded as well.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {:?} ({}), using info", level, e);
        EnvFilter::new("info")
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}
