use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use chalet_assistant::{configure_app, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    log::info!("Connecting to database...");
    let pool = db::get_db_pool().await;

    log::info!("Seeding store (no-op when already populated)...");
    db::init(&pool).await.expect("Failed to initialize store");

    log::info!("Starting server at http://localhost:8080");

    let pool_data = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_app)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
