use std::{
    env, fs,
    ops::Deref,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use url::Url;

use crate::{
    dao::get_path,
    error::Error,
    model::{SignalsReport, User},
    provider::{Analytics, DatabasePool},
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct Cache {
    pub signals: Option<SignalsReport>,
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub database: DatabasePool,
    pub analytics: Analytics,
    pub cache: Mutex<Cache>,
}

impl State {
    pub async fn new(
        config: Config,
        database: DatabasePool,
        analytics: Analytics,
    ) -> Result<State, Error> {
        Self::init_migrations(&database).await?;
        Self::init_trade_types(&config, &database).await?;
        Self::init_default_user(&config, &database).await?;

        Ok(Self {
            config,
            database,
            analytics,
            cache: Mutex::new(Cache { signals: None }),
        })
    }

    pub async fn init_migrations(database: &DatabasePool) -> Result<(), Error> {
        // Ordered so the trades table finds its referenced tables.
        let files = [
            "users.sql",
            "tradetypes.sql",
            "tradecodes.sql",
            "trades.sql",
        ];

        let dir = env!("CARGO_MANIFEST_DIR");

        for file in files {
            let data = fs::read_to_string(get_path(dir, file))?;
            sqlx::query(data.as_str())
                .execute(database.get_pool())
                .await?;
        }

        Ok(())
    }

    async fn init_trade_types(
        config: &Config,
        database: &DatabasePool,
    ) -> Result<(), Error> {
        for name in &config.trade_types {
            database.trade_types.insert_or_ignore(name).await?;
        }
        Ok(())
    }

    async fn init_default_user(
        config: &Config,
        database: &DatabasePool,
    ) -> Result<(), Error> {
        let user = User {
            id: 0,
            login: config.default_login.to_owned(),
            hash_password: sha256::digest(config.default_password.as_str()),
            last_login_date: Utc::now(),
            refresh_token: None,
        };
        database.users.insert_or_ignore(user).await?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
    pub analytics_host: String,
    pub signal_lookback_days: i64,
    pub recent_days: i64,
    pub signal_refresh_interval: u64,
    pub enable_signal_task: bool,
    pub default_login: String,
    pub default_password: String,
    pub trade_types: Vec<String>,
}

impl Config {
    pub fn analytics_ids_url(&self) -> String {
        format!("{}/ids", self.analytics_host)
    }

    pub fn analytics_process_url(&self) -> String {
        format!("{}/process", self.analytics_host)
    }

    pub fn analytics_recent_url(&self) -> String {
        format!("{}/recent", self.analytics_host)
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let database_url = env::var("DATABASE_URL")?;
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;

    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();

    let static_dir = format!(
        "{}/{}",
        env!("CARGO_MANIFEST_DIR"),
        env::var("STATIC_DIRECTORY")?
    );

    let analytics_host = env::var("ANALYTICS_HOST")?;
    Url::parse(&analytics_host)?;
    let analytics_host = analytics_host.trim_end_matches('/').to_owned();

    let signal_lookback_days = positive_days("SIGNAL_LOOKBACK_DAYS")?;
    let recent_days = positive_days("RECENT_DAYS")?;

    // tokio's interval panics on a zero period.
    let signal_refresh_interval: u64 =
        env::var("SIGNAL_REFRESH_INTERVAL_IN_MINUTES")?.parse()?;
    if signal_refresh_interval == 0 {
        return Err(Error::ConfigurationError(String::from(
            "SIGNAL_REFRESH_INTERVAL_IN_MINUTES must be at least 1",
        )));
    }
    let enable_signal_task: bool = env::var("ENABLE_SIGNAL_TASK")?.parse()?;

    let default_login = env::var("DEFAULT_LOGIN")?;
    let default_password = env::var("DEFAULT_PASSWORD")?;

    let trade_types = env::var("TRADE_TYPES")?
        .split(',')
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect::<Vec<String>>();

    let config = Config {
        database_url,
        server_host,
        port,
        allowed_origins,
        static_dir,
        analytics_host,
        signal_lookback_days,
        recent_days,
        signal_refresh_interval,
        enable_signal_task,
        default_login,
        default_password,
        trade_types,
    };

    Ok(config)
}

/// A non-positive day window would invert the analytics date range.
fn positive_days(key: &str) -> Result<i64, Error> {
    let value: i64 = env::var(key)?.parse()?;

    if value < 1 {
        return Err(Error::ConfigurationError(format!(
            "{} must be at least 1",
            key
        )));
    }

    Ok(value)
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = fs::read_to_string(path)?;

    parse_config_string(config_string)
}

fn parse_config_string(config: String) -> Result<(), Error> {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        env::set_var(key, value);
    }

    Ok(())
}
