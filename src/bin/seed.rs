use dotenvy::dotenv;

use shop_catalog::config::ServerConfig;
use shop_catalog::db::{establish_connection_pool, run_migrations};
use shop_catalog::repository::DieselRepository;
use shop_catalog::seed::seed_catalog;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    match seed_catalog(&repo) {
        Ok(Some(_)) => log::info!("Database {} seeded", config.database_url),
        Ok(None) => log::info!("Database {} left unchanged", config.database_url),
        Err(e) => {
            log::error!("Failed to seed database: {e}");
            std::process::exit(1);
        }
    }
}
