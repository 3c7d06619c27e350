//! HTTP surface of the site.
//!
//! Page routing does not go through axum's router: every `GET` that is not
//! an API call lands in [`page`], which hands the raw path to the site's
//! own resolver. axum only dispatches the contact form posts and the JSON
//! catalog endpoints.

use crate::core::chrome::Viewport;
use crate::core::contact::{dismiss_action, ContactForm, ContactFormView};
use crate::core::pages::RenderOutcome;
use crate::core::site::{current_year, Site};
use crate::core::ContactRelay;
use crate::domain::model::{ContactMessage, Notification, PageKey, Severity};
use crate::utils::error::{Result, SiteError};
use axum::body::Body;
use axum::extract::{Form, Path, State};
use axum::http::{header, HeaderMap, Method, Request, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

/// Shared by every request. The contact form carries the site-wide
/// in-flight flag.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub contact: Arc<ContactForm>,
}

impl AppState {
    pub fn new(site: Site, relay: Arc<dyn ContactRelay>) -> Self {
        let contact = ContactForm::new(relay, site.info().clone());
        Self {
            site: Arc::new(site),
            contact: Arc::new(contact),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let contact_path = state.site.routes().link_to(PageKey::Contact).to_string();
    let dismiss_path = dismiss_action(&contact_path);

    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{id}", get(get_project))
        .route(&contact_path, post(submit_contact).get(page).head(page))
        .route(&dismiss_path, post(dismiss_notification).get(page))
        .fallback(page)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

pub async fn serve(state: AppState, listen: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| SiteError::ServerError {
            message: format!("cannot bind {}: {}", listen, e),
        })?;
    tracing::info!("Serving {} on http://{}", state.site.info().name, listen);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SiteError::ServerError {
            message: e.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn trace_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, path = %path);

    let started = Instant::now();
    let response = next.run(request).instrument(span).await;
    tracing::info!(
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "{} {}",
        method,
        path
    );
    response
}

fn viewport_of(headers: &HeaderMap) -> Viewport {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    Viewport::from_user_agent(user_agent)
}

fn internal_error(e: SiteError) -> Response {
    tracing::error!("Rendering failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.user_friendly_message()).into_response()
}

/// Maps a render outcome onto HTTP: redirects become `303 See Other`, the
/// wildcard page is served with `404`.
fn respond(
    site: &Site,
    outcome: Result<Arc<RenderOutcome>>,
    viewport: Viewport,
    status: StatusCode,
) -> Response {
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => return internal_error(e),
    };
    match &*outcome {
        RenderOutcome::Redirect { location } => Redirect::to(location).into_response(),
        RenderOutcome::Page(page) => {
            let status = if page.page == PageKey::NotFound {
                StatusCode::NOT_FOUND
            } else {
                status
            };
            match site.document(page, viewport, current_year()) {
                Ok(html) => (status, Html(html)).into_response(),
                Err(e) => internal_error(e),
            }
        }
    }
}

async fn page(State(state): State<AppState>, method: Method, headers: HeaderMap, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let viewport = viewport_of(&headers);
    let outcome = state
        .site
        .navigate_with_contact(uri.path(), viewport, &state.contact.view());
    respond(&state.site, outcome, viewport, StatusCode::OK)
}

fn render_contact(state: &AppState, viewport: Viewport, view: &ContactFormView, status: StatusCode) -> Response {
    let contact_path = state.site.routes().link_to(PageKey::Contact);
    let outcome = state.site.navigate_with_contact(contact_path, viewport, view);
    respond(&state.site, outcome, viewport, status)
}

async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(message): Form<ContactMessage>,
) -> Response {
    let viewport = viewport_of(&headers);

    let (status, view) = match state.contact.submit(message.clone()).await {
        Ok(view) => (StatusCode::OK, view),
        Err(e) => {
            tracing::info!("Contact submission refused: {}", e);
            let status = match e {
                SiteError::SubmissionInFlight => StatusCode::CONFLICT,
                _ => StatusCode::UNPROCESSABLE_ENTITY,
            };
            let notification = Notification {
                severity: Severity::Error,
                message: e.user_friendly_message(),
            };
            (status, ContactFormView::notified(message, notification))
        }
    };

    render_contact(&state, viewport, &view, status)
}

/// Close control of the notification: the form comes back with the posted
/// values and without the notification.
async fn dismiss_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(message): Form<ContactMessage>,
) -> Response {
    let view = ContactFormView {
        is_submitting: state.contact.is_submitting(),
        ..ContactFormView::with_values(message)
    };
    render_contact(&state, viewport_of(&headers), &view, StatusCode::OK)
}

async fn list_projects(State(state): State<AppState>) -> Response {
    Json(state.site.catalog().records().to_vec()).into_response()
}

async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.site.catalog().find(&id) {
        Some(record) => Json(record.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("unknown project '{}'", id) })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(viewport_of(&headers), Viewport::Desktop);
        headers.insert(
            header::USER_AGENT,
            "Mozilla/5.0 (Linux; Android 14) Mobile".parse().unwrap(),
        );
        assert_eq!(viewport_of(&headers), Viewport::Mobile);
    }
}
