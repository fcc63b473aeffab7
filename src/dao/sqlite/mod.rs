pub use self::{
    path::get_path,
    repository::{Entity, Patch},
    types::{DBRow, DataBase, InsertQuery, PoolOption, PoolType, QueryResult},
};
mod path;
mod repository;
mod trade;
mod trade_code;
mod trade_type;
mod types;
mod user;

#[cfg(test)]
mod tests;
