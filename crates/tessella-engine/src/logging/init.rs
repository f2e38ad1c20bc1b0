use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; subsequent calls are ignored.
///
/// `RUST_LOG` takes precedence when set (standard `env_logger` filter
/// syntax, e.g. `tessella_engine=debug,wgpu=warn`); otherwise info-level
/// output is enabled.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
