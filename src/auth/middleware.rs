use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{ContentType, Header as _, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::{
        policy::{self, Decision},
        Principal,
    },
    errors::AppError,
};

pub const AUTHENTICATION_REQUIRED: &str =
    "Full authentication is required to access this resource";

/// Bearer-token gate followed by the path access policy.
///
/// Token problems never fail the request here: the request simply carries no
/// principal, and the policy answers 401 if the path needs one.
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
            // The router matches on the percent-decoded path, so rules must too.
            let path = req.match_info().as_str().to_string();

            let already_authenticated = req.extensions().get::<Principal>().is_some();
            if !policy::is_public(&path) && !already_authenticated {
                if let Some(principal) = authenticate_request(&req).await {
                    req.extensions_mut().insert(principal);
                }
            }

            let principal = req.extensions().get::<Principal>().cloned();
            match policy::authorize(&path, principal.as_ref()) {
                Decision::Allow => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Decision::Unauthenticated => {
                    log::debug!("Rejecting unauthenticated request to {}", path);
                    let response = HttpResponse::Unauthorized()
                        .insert_header(ContentType::plaintext())
                        .body(format!("Unauthorized: {}", AUTHENTICATION_REQUIRED));
                    Ok(req.into_response(response).map_into_right_body())
                }
                Decision::Forbidden => {
                    let username = principal.map(|p| p.username).unwrap_or_default();
                    log::warn!("Denied {} access to {}", username, path);
                    let response = AppError::Forbidden("Access is denied".to_string())
                        .error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn authenticate_request(req: &ServiceRequest) -> Option<Principal> {
    if !req.headers().contains_key(AUTHORIZATION) {
        return None;
    }

    let state = req.app_data::<web::Data<AppState>>()?.clone();

    let bearer = match Authorization::<Bearer>::parse(req) {
        Ok(header) => header.into_scheme(),
        Err(e) => {
            log::debug!("Ignoring non-bearer Authorization header: {}", e);
            return None;
        }
    };

    resolve_principal(&state, bearer.token()).await
}

/// Maps a bearer token to a principal: extract the subject, load the user,
/// then re-validate the token against that user. Every failure yields `None`.
pub async fn resolve_principal(state: &AppState, token: &str) -> Option<Principal> {
    let subject = match state.jwt_service.extract_subject(token) {
        Ok(subject) => subject,
        Err(e) => {
            log::debug!("Bearer token rejected: {}", e);
            return None;
        }
    };

    let user = match state.auth_service.load_user(&subject).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Token subject '{}' could not be loaded: {}", subject, e);
            return None;
        }
    };

    if !state.jwt_service.is_valid(token, &user.username) {
        log::debug!("Token for '{}' is expired or mismatched", subject);
        return None;
    }

    Some(Principal::from(&user))
}

// Extractor for the authenticated principal in handlers
pub struct AuthenticatedUser(pub Principal);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let principal = req
            .extensions()
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(AUTHENTICATION_REQUIRED.to_string()));

        ready(principal.map(AuthenticatedUser))
    }
}
