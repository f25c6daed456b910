//! Client configuration

use shared::DEFAULT_CURRENCY_SYMBOL;

/// Catalog endpoint, relative to the base URL
pub const MENU_PATH: &str = "waiter/menu";
/// Order creation endpoint, relative to the base URL
pub const ORDERS_PATH: &str = "waiter/orders";

/// Waiter client configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WAITER_API_BASE | http://localhost:5000 | 服务器地址 |
/// | WAITER_REQUEST_TIMEOUT_SECS | 5 | 请求超时(秒) |
/// | WAITER_CURRENCY_SYMBOL | ₱ | 货币符号 |
/// | WAITER_LOG_LEVEL | info | 日志级别 |
/// | WAITER_LOG_DIR | (unset) | 日志目录，未设置时输出到终端 |
#[derive(Debug, Clone)]
pub struct WaiterConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds, applied to every request
    pub timeout_secs: u64,

    /// Prefix used when formatting prices
    pub currency_symbol: String,

    pub log_level: String,

    pub log_dir: Option<String>,
}

impl WaiterConfig {
    /// Create a configuration with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("WAITER_API_BASE").unwrap_or(defaults.base_url),
            timeout_secs: std::env::var("WAITER_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            currency_symbol: std::env::var("WAITER_CURRENCY_SYMBOL")
                .unwrap_or(defaults.currency_symbol),
            log_level: std::env::var("WAITER_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("WAITER_LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the currency symbol
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the log level and optional log directory
    pub fn with_logging(mut self, level: impl Into<String>, dir: Option<String>) -> Self {
        self.log_level = level.into();
        self.log_dir = dir;
        self
    }

    /// Full URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
