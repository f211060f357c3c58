use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizbook_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
        .allow_any_header()
        .expose_headers(vec![quizbook_server::middleware::REQUEST_ID_HEADER])
        .max_age(3600);

    match &config.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.is_production() {
        config
            .validate_for_production()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(|cfg| handlers::configure(cfg, &state))
    })
    .bind(bind_address)?
    .run()
    .await
}
