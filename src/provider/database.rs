use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    model::{Table, Trade, TradeCode, TradeType, User},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub users: Table<User>,
    pub trade_types: Table<TradeType>,
    pub trade_codes: Table<TradeCode>,
    pub trades: Table<Trade>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        Self::connect(config.database_url.as_str(), 5).await
    }

    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    // Off by default in SQLite; the schema relies on it.
                    sqlx::query("PRAGMA foreign_keys = ON")
                        .execute(&mut *conn)
                        .await
                        .map(drop)
                })
            })
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(DatabasePool {
            users: Table::new(pool.clone()),
            trade_types: Table::new(pool.clone()),
            trade_codes: Table::new(pool.clone()),
            trades: Table::new(pool.clone()),
            pool,
        })
    }

    pub fn get_pool(&self) -> &PoolType {
        &self.pool
    }
}
