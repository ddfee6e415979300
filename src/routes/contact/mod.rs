mod get;
mod post;

pub use get::*;
pub use post::*;

use axum::response::{IntoResponse, Response};

use crate::utils::{e500, error_chain_fmt};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Failed to access the contact form session")]
    SessionError(#[source] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        e500(self).into_response()
    }
}
