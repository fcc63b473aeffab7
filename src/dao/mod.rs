#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::{
    get_path, DBRow, DataBase, Entity, InsertQuery, Patch, PoolOption,
    PoolType, QueryResult,
};
