use tracing::{error, warn, Level};

use vittrade::{
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    error::Error,
    handler::signals,
    provider::{Analytics, DatabasePool},
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (config, database) = match init().await {
        Ok((config, database)) => (config, database),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let analytics = Analytics::new(config.clone());
    let state = State::new(config, database, analytics).await?;
    let app_state = AppState::new(state);

    // The journal must come up even when the analytics service is down;
    // the background task retries on its interval.
    if let Err(err) = signals::refresh(app_state.clone()).await {
        warn!("initial signal load failed: {}", err);
    }

    let (_, _) = tokio::try_join!(
        server::server_task(&app_state),
        signals::signals_task(app_state.clone()),
    )?;

    Ok(())
}

async fn init() -> Result<(Config, DatabasePool), Error> {
    set_configuration()?;
    let config = get_configuration()?;
    let database = DatabasePool::new(&config).await?;
    Ok((config, database))
}
