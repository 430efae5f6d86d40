use actix_web::HttpResponse;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::{StatusCode, header};
use serde_json::json;

use crate::handlers::{session, view};
use crate::middleware::auth::TOKEN_COOKIE;
use crate::middleware::error::{AppError, AppResult};
use crate::routing::RequestContext;

fn form_page(
    ctx: &RequestContext,
    template: &str,
    status: StatusCode,
    username: &str,
    error: Option<&str>,
) -> AppResult<HttpResponse> {
    view::page(
        ctx.state.pages.as_ref(),
        status,
        template,
        &json!({ "username": username, "error": error }),
    )
}

fn redirect_to_author(author_id: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("/author/{}", author_id)))
        .finish()
}

/// GET /auth/signup
pub async fn signup_form(ctx: RequestContext) -> AppResult<HttpResponse> {
    form_page(&ctx, "signup.html", StatusCode::OK, "", None)
}

/// POST /auth/signup
pub async fn signup(ctx: RequestContext) -> AppResult<HttpResponse> {
    let credentials = session::credentials(&ctx);

    match session::sign_up(&ctx.state, &credentials).await {
        Ok(author) => Ok(redirect_to_author(author.id.as_str())),
        Err(AppError::BadRequest(message)) => form_page(
            &ctx,
            "signup.html",
            StatusCode::BAD_REQUEST,
            &credentials.username,
            Some(message.as_str()),
        ),
        Err(err) => Err(err),
    }
}

/// GET /auth/signin
pub async fn signin_form(ctx: RequestContext) -> AppResult<HttpResponse> {
    form_page(&ctx, "signin.html", StatusCode::OK, "", None)
}

/// POST /auth/signin
pub async fn signin(ctx: RequestContext) -> AppResult<HttpResponse> {
    let credentials = session::credentials(&ctx);

    let Some(signed_in) = session::sign_in(&ctx.state, &credentials).await? else {
        return form_page(
            &ctx,
            "signin.html",
            StatusCode::UNAUTHORIZED,
            &credentials.username,
            Some("Invalid credentials"),
        );
    };

    let cookie = Cookie::build(TOKEN_COOKIE, signed_in.token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    let mut response = redirect_to_author(signed_in.author_id.as_str());
    response
        .add_cookie(&cookie)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(response)
}
