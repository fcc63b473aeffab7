mod analytics_request;
mod indicator_row;

pub use analytics_request::{ProcessRequest, RecentRequest};
pub use indicator_row::IndicatorRow;
