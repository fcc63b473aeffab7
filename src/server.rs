use actix_cors::Cors;
use actix_files::Files;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpServer};

use crate::{
    configuration::{AppState, State},
    controller::{
        recent_data, signals, trade_close, trade_codes, trade_delete,
        trade_open, trade_types, trade_update, trades, version,
    },
    error::Error,
};

pub async fn server_task(app_state: &AppState<State>) -> Result<(), Error> {
    let app = app_state.clone();
    tokio::spawn(async move {
        let server = init_server(app)?;
        server.await?;
        Ok(())
    })
    .await?
}

fn init_server(app_state: AppState<State>) -> Result<Server, Error> {
    let host = app_state.config.server_host.to_owned();
    let port = app_state.config.port;

    let server = HttpServer::new(move || {
        let app = app_state.clone();
        let static_dir = app_state.config.static_dir.to_owned();
        let allowed_cors = String::from("*");
        let cors_access_all =
            app.config.allowed_origins.contains(&allowed_cors);
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                if cors_access_all {
                    return true;
                }
                let allowed = &app.config.allowed_origins;
                if let Ok(origin) = origin.to_str() {
                    return allowed.contains(&origin.to_owned());
                }
                false
            })
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
            .allowed_header(header::CONTENT_TYPE);

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().limit(4096))
            .service(
                web::scope("/api")
                    .service(trades::get_index)
                    .service(trades::post_index)
                    .service(trade_open::get_index)
                    .service(trade_open::post_index)
                    .service(trade_close::index)
                    .service(trade_update::index)
                    .service(trade_delete::index)
                    .service(trade_types::get_index)
                    .service(trade_types::post_index)
                    .service(trade_codes::get_index)
                    .service(trade_codes::post_index)
                    .service(signals::index)
                    .service(recent_data::index)
                    .service(version::index),
            )
            .service(Files::new("/", static_dir).index_file("index.html"))
    })
    .bind((host, port))?
    .disable_signals()
    .run();
    Ok(server)
}
