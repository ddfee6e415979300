use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tower_sessions::{Expiry, MokaStore, SessionManagerLayer};
use tracing::Span;

use crate::configuration::{SessionSettings, Settings};
use crate::routes::{change_field, contact_form, health_check, submit_contact};
use crate::utils::e500;

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(configuration.application.address()).await?;
        let port = listener.local_addr()?.port();
        let router = router(&configuration);
        tracing::info!(port, "Contact form application bound");

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, self.router).await
    }
}

pub fn router(configuration: &Settings) -> Router {
    let session_layer = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_session_error))
        .layer(session_manager(&configuration.session));

    Router::new()
        .route("/", get(contact_form))
        .route("/contact", post(submit_contact))
        .route("/contact/field", post(change_field))
        .route("/health_check", get(health_check))
        .layer(session_layer)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Sessions live in a bounded cache and expire after a period of inactivity,
/// so abandoned forms are evicted instead of accumulating.
fn session_manager(settings: &SessionSettings) -> SessionManagerLayer<MokaStore> {
    let store = MokaStore::new(Some(settings.max_sessions));
    SessionManagerLayer::new(store)
        .with_secure(settings.secure_cookie)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            settings.inactivity_timeout_seconds,
        )))
}

async fn handle_session_error<E>(e: E) -> StatusCode
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    e500(e)
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
