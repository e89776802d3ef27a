use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::Json;
use leitstand_ai::{
    error::AiError,
    flows::{suggest_tags::TagSuggester, summarize_article::ArticleSummarizer},
};
use leitstand_common::slug::Slug;
use leitstand_store::{comments::CommentStore, posts::PostStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

mod json;
mod query;
mod routes;
#[cfg(test)]
pub(crate) mod test_support;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub posts: Arc<PostStore>,
    pub comments: Arc<CommentStore>,
    pub summarizer: Arc<dyn ArticleSummarizer>,
    pub tag_suggester: Arc<dyn TagSuggester>,
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Query rejected: {0}")]
    QueryRejection(#[from] QueryRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Post with slug {0} was not found.")]
    PostBySlugNotFound(Slug),
    #[error(transparent)]
    Ai(#[from] AiError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::PostBySlugNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::QueryRejection(_) | ServerError::JsonRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::JsonResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // The admin tools surface rate limits so the operator can back
            // off instead of retrying immediately.
            ServerError::Ai(error) if error.is_rate_limited() => StatusCode::TOO_MANY_REQUESTS,
            ServerError::Ai(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
struct ErrorResponse {
    status: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error_response = ErrorResponse {
            status: status.as_u16(),
        };
        (status, Json(error_response)).into_response()
    }
}
