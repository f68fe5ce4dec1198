//! Log output for hosts of `xy-chart`.
//!
//! Axis fitting, tick layout and viewport changes are reported as `tracing`
//! events (`debug!` for layout passes and range refits, `trace!` for every
//! user range change, `warn!` when an axis cannot be laid out). Nothing is
//! printed until a subscriber is installed.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only does something with the `telemetry` feature. Returns `false` without
/// the feature or when the host already installed a global subscriber; set
/// `RUST_LOG=xy_chart=debug` to follow tick layout passes.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
