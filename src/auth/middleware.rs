use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::RequestId,
    models::domain::UserId,
};

/// Rejects requests without a valid bearer credential and records the
/// caller's `UserId` in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut req = req;

            match authenticate_request(&mut req).await {
                Ok(user_id) => {
                    req.extensions_mut().insert(user_id);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let request_id = req
                        .extensions()
                        .get::<RequestId>()
                        .map(|id| id.0.clone())
                        .unwrap_or_default();
                    log::warn!(
                        "[{}] Rejected credential for {} {}: {}",
                        request_id,
                        req.method(),
                        req.path(),
                        err
                    );

                    let (http_req, _payload) = req.into_parts();
                    let res = HttpResponse::from_error(err).map_into_right_body();
                    Ok(ServiceResponse::new(http_req, res))
                }
            }
        })
    }
}

async fn authenticate_request(req: &mut ServiceRequest) -> AppResult<UserId> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("Identity provider not configured".to_string()))?;

    let credentials = req
        .extract::<BearerAuth>()
        .await
        .map_err(|_| AppError::Unauthorized("Missing or malformed bearer credential".to_string()))?;

    state.identity_provider.authenticate(credentials.token())
}

// Extractor for the authenticated caller in handlers
pub struct AuthenticatedUser(pub UserId);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user_id = req
            .extensions()
            .get::<UserId>()
            .copied()
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()));

        ready(user_id.map(AuthenticatedUser))
    }
}
