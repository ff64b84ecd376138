use potion_crafter::{CacheAside, CatalogService, Config, MemoryStore, WizardWorldClient};

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=potion_crafter=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Wizard World Potion Crafter");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            eprintln!("Please set the required environment variables and run again.");
            std::process::exit(1);
        }
    };

    let api = match WizardWorldClient::new(&config.api_base_url) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to build catalog API client: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let cache = if config.cache_enabled {
        log::info!(
            "Cache enabled (ttl {}s, capacity {})",
            config.cache_ttl.as_secs(),
            config.cache_capacity
        );
        CacheAside::new(Box::new(MemoryStore::new(config.cache_ttl, config.cache_capacity)))
    } else {
        log::info!("Cache disabled, every read goes to the catalog API");
        CacheAside::disabled()
    };

    let catalog = CatalogService::new(api, cache);

    if let Err(e) = potion_crafter::console::run(&catalog) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
