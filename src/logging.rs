use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,image_comparator=info";

fn filter_for(enable_debug: bool) -> EnvFilter {
    if enable_debug {
        EnvFilter::new("info,image_comparator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the tracing subscriber and route `log` records into it.
/// Safe to call more than once; only the first call takes effect.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(enable_debug))
        .with_target(enable_debug)
        .with_thread_names(false)
        .try_init()
        .ok();

    tracing::debug!(enable_debug, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(true);
        init_tracing(false);
        log::debug!("still alive after double init");
    }

    #[test]
    fn test_debug_filter() {
        assert!(filter_for(true).to_string().contains("image_comparator=debug"));
    }
}
