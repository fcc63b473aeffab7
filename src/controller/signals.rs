use actix_web::{get, web, Responder, Result};

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler,
};

/// Cached signal report; a cold cache triggers the load in place.
#[get("/signals")]
async fn index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let cached = {
        let cache = state.cache.lock().map_err(|_| {
            Error::ServerError(String::from("signal cache lock"))
        })?;
        cache.signals.clone()
    };

    if let Some(report) = cached {
        return Ok(web::Json(report));
    }

    let report = handler::signals::refresh(state.get_ref().clone()).await?;

    Ok(web::Json(report))
}
