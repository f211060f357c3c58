use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{take_envelope, RecordInput, RecordPatch},
        response::{envelope, RecordDto},
    },
    services::RecordService,
};

// Each resource scope registers its own `RecordService` as app data, so
// these handlers serve both /questions and /quizzes.

/// POST /{resources}
pub async fn create_record(
    service: web::Data<RecordService>,
    body: web::Json<Value>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let kind = service.kind();
    let input: RecordInput = take_envelope(body.into_inner(), kind.singular)?;

    let record = service.create(&auth.0, input).await?;
    Ok(HttpResponse::Ok().json(envelope(kind.singular, RecordDto::from(record))?))
}

/// GET /{resources}
pub async fn list_records(
    service: web::Data<RecordService>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let records: Vec<RecordDto> = service
        .list(&auth.0)
        .await?
        .into_iter()
        .map(RecordDto::from)
        .collect();

    Ok(HttpResponse::Ok().json(envelope(service.kind().plural, records)?))
}

/// GET /{resources}/{id}
pub async fn show_record(
    service: web::Data<RecordService>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let record = service.show(&id).await?;
    Ok(HttpResponse::Ok().json(envelope(service.kind().singular, RecordDto::from(record))?))
}

/// PATCH /{resources}/{id}
pub async fn update_record(
    service: web::Data<RecordService>,
    id: web::Path<String>,
    body: web::Json<Value>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let patch: RecordPatch = take_envelope(body.into_inner(), service.kind().singular)?;

    service.update(&auth.0, &id, patch).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /{resources}/{id}
pub async fn delete_record(
    service: web::Data<RecordService>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    service.delete(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn record_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_record))
            .route(web::get().to(list_records)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(show_record))
            .route(web::patch().to(update_record))
            .route(web::delete().to(delete_record)),
    );
}
