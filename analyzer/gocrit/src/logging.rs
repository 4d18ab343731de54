use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect, and an
/// already-installed global subscriber is left alone.
///
/// ```text
/// RUST_LOG=gocrit=debug            # unit spans and resolved checkers
/// RUST_LOG=gocrit_checkers=trace   # why each literal was rejected
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter, Registry};

        if std::env::var("RUST_LOG").is_ok() {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            let _ = Registry::default()
                .with(EnvFilter::from_default_env())
                .with(tree)
                .try_init();
        }
    });
}
