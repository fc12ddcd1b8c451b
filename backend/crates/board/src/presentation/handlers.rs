//! HTTP Handlers

use std::sync::Arc;

use auth::AuthSession;
use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use axum::Form;
use axum::response::{Html, IntoResponse, Redirect, Response};
use platform::csrf::CsrfProtect;
use platform::html::render;

use crate::application::{ListCommentsUseCase, SubmitCommentUseCase};
use crate::domain::repository::CommentRepository;
use crate::error::{BoardError, BoardResult};
use crate::presentation::dto::CommentForm;
use crate::presentation::views::{AdminTemplate, DashboardTemplate, IndexTemplate};

/// Shared state for board handlers
#[derive(Clone)]
pub struct BoardAppState<R>
where
    R: CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub csrf: Arc<CsrfProtect>,
}

/// GET /
pub async fn index() -> BoardResult<Html<String>> {
    render(&IndexTemplate).map_err(BoardError::from)
}

/// GET /dashboard
pub async fn dashboard<R>(
    State(state): State<BoardAppState<R>>,
    Extension(session): Extension<AuthSession>,
    headers: HeaderMap,
) -> BoardResult<Response>
where
    R: CommentRepository + Clone + Send + Sync + 'static,
{
    let comments = ListCommentsUseCase::new(state.repo.clone())
        .execute(&session)
        .await?;

    let issued = state.csrf.issue(&headers);
    let mut response = render(&DashboardTemplate {
        user_id: session.user_id.value(),
        csrf_token: &issued.token,
        comments: &comments,
    })?
    .into_response();

    issued.attach_cookie(&mut response);
    Ok(response)
}

/// POST /submit_comment
pub async fn submit_comment<R>(
    State(state): State<BoardAppState<R>>,
    Extension(session): Extension<AuthSession>,
    Form(form): Form<CommentForm>,
) -> BoardResult<Redirect>
where
    R: CommentRepository + Clone + Send + Sync + 'static,
{
    SubmitCommentUseCase::new(state.repo.clone())
        .execute(&session, &form.comment)
        .await?;

    Ok(Redirect::to("/dashboard"))
}

/// GET /admin
pub async fn admin() -> BoardResult<Html<String>> {
    render(&AdminTemplate).map_err(BoardError::from)
}
