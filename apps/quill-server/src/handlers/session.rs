//! Account creation and credential checks shared by the API and the website.

use quill_core::RepoError;
use quill_core::domain::{Author, AuthorId, Credentials};

use crate::middleware::error::{AppError, AppResult};
use crate::routing::RequestContext;
use crate::state::AppState;

/// A successful sign-in.
#[derive(Debug)]
pub struct SignedIn {
    pub author_id: AuthorId,
    pub token: String,
}

pub fn credentials(ctx: &RequestContext) -> Credentials {
    Credentials::new(ctx.form.get("username"), ctx.form.get("password"))
}

/// Verify credentials and issue a session token.
///
/// `None` when the username is unknown or the password does not match.
pub async fn sign_in(state: &AppState, credentials: &Credentials) -> AppResult<Option<SignedIn>> {
    let Some(author) = state
        .authors
        .find_by_username(credentials.username.trim())
        .await?
    else {
        tracing::debug!("Sign-in for unknown username");
        return Ok(None);
    };

    if !state
        .passwords
        .verify(&credentials.password, &author.password_hash)
    {
        tracing::debug!(author_id = %author.id, "Sign-in with wrong password");
        return Ok(None);
    }

    let token = state.tokens.issue(&author.id)?;
    tracing::info!(author_id = %author.id, "Author signed in");

    Ok(Some(SignedIn {
        author_id: author.id,
        token,
    }))
}

/// Validate and register a new author.
pub async fn sign_up(state: &AppState, credentials: &Credentials) -> AppResult<Author> {
    credentials.validate_for_signup()?;

    let password_hash = state.passwords.hash(&credentials.password)?;
    let author = state
        .authors
        .create(credentials.username.trim(), &password_hash)
        .await
        .map_err(|err| match err {
            RepoError::Constraint(_) => AppError::BadRequest("Username already taken".to_string()),
            other => AppError::from(other),
        })?;

    tracing::info!(author_id = %author.id, "Author signed up");
    Ok(author)
}
