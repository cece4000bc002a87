/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG`:
/// - `RUST_LOG=info` - order outcomes and actor lifecycle
/// - `RUST_LOG=debug` - every request sent to and handled by an actor
/// - `RUST_LOG=order_intake::service=debug` - only the order service
///
/// Call once, at the start of `main`. A second call panics.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
