pub mod health_handler;
pub mod record_handler;

use actix_web::web;

use crate::{app_state::AppState, auth::AuthMiddleware, errors::AppError};

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use record_handler::{
    create_record, delete_record, list_records, record_routes, show_record, update_record,
};

/// Registers the health probes and one authenticated scope per resource kind.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(health_check)
        .service(health_check_ready)
        .service(health_check_live);

    for service in [&state.question_service, &state.quiz_service] {
        cfg.service(
            web::scope(&service.kind().path())
                .app_data(web::Data::from(service.clone()))
                .wrap(AuthMiddleware)
                .configure(record_routes),
        );
    }
}
