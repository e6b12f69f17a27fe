//! Common logging initializer
//!

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

/// Initialise the tracing stack.  Filters come from the environment (`RUST_LOG`), the
/// default output is the compact fmt layer, and `use_tree` switches to the hierarchical
/// output which is nicer when chasing spans.
///
pub fn init_logging(use_tree: bool) {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_span_retrace(true)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    let fmt = if use_tree {
        None
    } else {
        Some(
            fmt::layer()
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(false)
                .compact(),
        )
    };

    // Combine filter & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(fmt)
        .init();
}
