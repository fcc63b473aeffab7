use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessRequest {
    pub ids: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RecentRequest {
    pub ids: Vec<String>,
    pub days: i64,
}
