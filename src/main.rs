use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once, before the terminal enters raw mode.
///
/// `RUST_LOG` selects the filter; the default stays quiet because stderr
/// shares the terminal with the UI.
fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}

fn main() {
    init_logging();

    if let Err(err) = concentric::app::run() {
        log::error!("fatal: {err}");
        eprintln!("concentric: {err}");
        std::process::exit(1);
    }
}
