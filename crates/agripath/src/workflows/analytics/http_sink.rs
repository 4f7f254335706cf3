use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::batcher::{DeliveryError, EventSink};
use super::domain::EventBatch;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts batches to the ingestion endpoint as `{ "events": [...] }`.
#[derive(Clone)]
pub struct HttpEventSink {
    client: Client,
    endpoint: String,
}

impl HttpEventSink {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EventSink for HttpEventSink {
    async fn deliver(&self, batch: &EventBatch) -> Result<(), DeliveryError> {
        let response = self.client.post(&self.endpoint).json(batch).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
            })
        }
    }

    fn beacon(&self, batch: EventBatch) {
        let request = self.client.post(&self.endpoint).json(&batch);
        tokio::spawn(async move {
            if let Err(error) = request.send().await {
                debug!(%error, "beacon delivery failed");
            }
        });
    }
}
