use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Remote summarization service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the summarization service (scheme + host + path prefix).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Route appended to the base URL.
    #[serde(default = "default_route")]
    pub route: String,
    /// Detail level passed as the `summary_detail` query parameter.
    #[serde(default)]
    pub summary_detail: u8,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_base_url() -> String {
    "https://telkom-ai-dag.api.apilogy.id/LLama3Summarize/0.0.4/telkomllm".to_string()
}

fn default_route() -> String {
    "/summarize_file".to_string()
}

fn default_api_key_env() -> String {
    "SUMVIEW_API_KEY".to_string()
}

fn default_timeout() -> u32 {
    120
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            route: default_route(),
            summary_detail: 0,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ServiceConfig {
    /// Full endpoint URL including the detail query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}?summary_detail={}",
            self.base_url, self.route, self.summary_detail
        )
    }
}
