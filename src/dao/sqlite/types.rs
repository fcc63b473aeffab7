use sqlx::{
    sqlite::{
        SqliteArguments, SqlitePoolOptions, SqliteQueryResult, SqliteRow,
    },
    Sqlite, SqlitePool,
};

pub type PoolType = SqlitePool;
pub type PoolOption = SqlitePoolOptions;
pub type DBRow = SqliteRow;
pub type QueryResult = SqliteQueryResult;
pub type DataBase = Sqlite;
pub type InsertQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;
