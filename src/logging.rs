//! Setting up logging.
//!
//! The crate itself only emits events via the [tracing] crate. Turning them
//! into output is left to the application. For small tools and tests, this
//! module provides a function to set up a subscriber.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-codec.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to see every compression pointer followed while decoding:
///   RUST_LOG=domain_codec::base::name=TRACE
///
/// Calling the function again after a subscriber has been installed has no
/// effect.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
