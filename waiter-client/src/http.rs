//! HTTP client for the waiter API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{MenuEntry, OrderReceipt, OrderRequest, parse_menu_response};

use crate::config::{MENU_PATH, ORDERS_PATH, WaiterConfig};
use crate::error::{ClientError, ClientResult};

/// Network collaborator of the order flow
///
/// The controller is generic over this trait so tests can substitute a fake.
#[async_trait]
pub trait WaiterApi: Send + Sync + 'static {
    /// `GET /waiter/menu`, parsed into an ordered snapshot
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuEntry>>;

    /// `POST /waiter/orders`
    async fn create_order(&self, order: &OrderRequest) -> ClientResult<OrderReceipt>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkWaiterApi {
    client: Client,
    menu_url: String,
    orders_url: String,
}

impl NetworkWaiterApi {
    pub fn new(config: &WaiterConfig) -> ClientResult<Self> {
        if config.timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be at least 1 second".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            menu_url: config.endpoint(MENU_PATH),
            orders_url: config.endpoint(ORDERS_PATH),
        })
    }

    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }

    /// Read the body of a response, turning non-2xx into `HttpStatus`
    async fn read_body(response: reqwest::Response) -> ClientResult<String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus { status, body });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl WaiterApi for NetworkWaiterApi {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuEntry>> {
        tracing::debug!(url = %self.menu_url, "Fetching menus");
        let response = self.client.get(&self.menu_url).send().await?;
        let body = Self::read_body(response).await?;
        let entries = parse_menu_response(&body)?;
        tracing::debug!(count = entries.len(), "Menu response parsed");
        Ok(entries)
    }

    async fn create_order(&self, order: &OrderRequest) -> ClientResult<OrderReceipt> {
        tracing::debug!(url = %self.orders_url, seat = %order.seat, "Posting order");
        let response = self.client.post(&self.orders_url).json(order).send().await?;
        let body = Self::read_body(response).await?;
        Ok(OrderReceipt::from_body(&body))
    }
}
