use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::error::Error;

/// Build info for the dashboard header.
#[get("/version")]
async fn index() -> Result<impl Responder, Error> {
    Ok(web::Json(build_info()))
}

fn build_info() -> Response {
    Response {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub name: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_info_names_the_package() {
        let info = build_info();

        assert_eq!(info.name, "vittrade");
        assert!(!info.version.is_empty());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "vittrade");
        assert_eq!(json["version"], info.version);
    }
}
