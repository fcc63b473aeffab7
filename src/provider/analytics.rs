use std::collections::HashMap;

use reqwest::Client;

use crate::{
    configuration::Config,
    error::Error,
    types::{IndicatorRow, ProcessRequest, RecentRequest},
};

/// Client for the external indicator/signal service. The service owns
/// all signal computation; this side only ships ids and date ranges
/// over and decodes the returned tables.
#[derive(Debug)]
pub struct Analytics {
    pub config: Config,
    client: Client,
}

impl Analytics {
    pub fn new(config: Config) -> Self {
        Analytics {
            config,
            client: Client::new(),
        }
    }

    pub async fn load_invest_ids(&self) -> Result<Vec<String>, Error> {
        let url = self.config.analytics_ids_url();
        let json = self
            .client
            .get(url)
            .send()
            .await?
            .json::<Vec<String>>()
            .await?;

        Ok(json)
    }

    pub async fn run_parallel_processing(
        &self,
        ids: &[String],
        start_date: &str,
        end_date: &str,
    ) -> Result<HashMap<String, Vec<IndicatorRow>>, Error> {
        let url = self.config.analytics_process_url();
        let body = ProcessRequest {
            ids: ids.to_vec(),
            start_date: start_date.to_owned(),
            end_date: end_date.to_owned(),
        };
        let json = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .json::<HashMap<String, Vec<IndicatorRow>>>()
            .await?;

        Ok(json)
    }

    pub async fn get_recent_data(
        &self,
        ids: &[String],
        days: i64,
    ) -> Result<HashMap<String, Vec<IndicatorRow>>, Error> {
        let url = self.config.analytics_recent_url();
        let body = RecentRequest {
            ids: ids.to_vec(),
            days,
        };
        let json = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .json::<HashMap<String, Vec<IndicatorRow>>>()
            .await?;

        Ok(json)
    }
}
