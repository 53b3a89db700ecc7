use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use shop_catalog::config::ServerConfig;
use shop_catalog::db::{establish_connection_pool, run_migrations};
use shop_catalog::repository::DieselRepository;
use shop_catalog::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

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

    log::info!(
        "Listening on {}:{} (database: {})",
        config.address,
        config.port,
        config.database_url
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.address, config.port))?.run().await
}
