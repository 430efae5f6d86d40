use actix_web::HttpResponse;

use crate::handlers::{session, view};
use crate::middleware::error::AppResult;
use crate::routing::RequestContext;

/// POST /api/login
///
/// Unknown usernames and wrong passwords both answer with the same failure
/// envelope.
pub async fn login(ctx: RequestContext) -> AppResult<HttpResponse> {
    let credentials = session::credentials(&ctx);

    match session::sign_in(&ctx.state, &credentials).await? {
        Some(signed_in) => Ok(view::success(signed_in.token)),
        None => Ok(view::failure("Invalid credentials")),
    }
}
