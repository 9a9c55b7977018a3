use crate::config::registry::default_locations;
use crate::core::message::DEFAULT_TEMPLATE;
use crate::core::{ConfigProvider, Location, SiteFailurePolicy};
use crate::utils::error::{Result, WatchError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_unique, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub schedule: ScheduleConfig,
    pub http: HttpConfig,
    pub gateway: GatewayConfig,
    pub message: MessageConfig,
    pub locations: Vec<Location>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            http: HttpConfig::default(),
            gateway: GatewayConfig::default(),
            message: MessageConfig::default(),
            locations: default_locations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub interval_seconds: u64,
    pub deduplicate: bool,
    pub on_site_failure: SiteFailurePolicy,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 60,
            deduplicate: false,
            on_site_failure: SiteFailurePolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("slot-watch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub from: String,
    pub to: String,
    pub username: String,
    pub password: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.46elks.com/a1/SMS".to_string(),
            from: "Vaccintid".to_string(),
            to: "+46000000000".to_string(),
            username: "clientid".to_string(),
            password: "clientsecret".to_string(),
        }
    }
}

// 避免 verbose 模式把密碼寫進日誌
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl GatewayConfig {
    /// 送出前確認憑證裡沒有未展開的 ${VAR}
    pub fn ensure_resolved(&self) -> Result<()> {
        let fields = [
            ("gateway.endpoint", &self.endpoint),
            ("gateway.from", &self.from),
            ("gateway.to", &self.to),
            ("gateway.username", &self.username),
            ("gateway.password", &self.password),
        ];
        for (field, value) in fields {
            if let Some(caps) = ENV_VAR.captures(value) {
                return Err(WatchError::ConfigValidationError {
                    field: field.to_string(),
                    message: format!("environment variable {} is not set", &caps[1]),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub template: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| WatchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SMS_PASSWORD})，未設定的保留原樣。
    /// 值會依 TOML 基本字串規則跳脫，只適用於雙引號字串內的 `${VAR}`。
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                match std::env::var(var_name) {
                    Ok(value) => escape_basic_string(&value),
                    Err(_) => format!("${{{}}}", var_name),
                }
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range(
            "schedule.interval_seconds",
            self.schedule.interval_seconds,
            1,
            86_400,
        )?;
        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;

        validate_url("gateway.endpoint", &self.gateway.endpoint)?;
        validate_non_empty_string("gateway.from", &self.gateway.from)?;
        validate_non_empty_string("gateway.to", &self.gateway.to)?;
        validate_non_empty_string("message.template", &self.message.template)?;

        if self.locations.is_empty() {
            return Err(WatchError::MissingConfigError {
                field: "locations".to_string(),
            });
        }
        for (index, location) in self.locations.iter().enumerate() {
            validate_non_empty_string(&format!("locations[{}].name", index), &location.name)?;
            validate_url(&format!("locations[{}].poll_url", index), &location.poll_url)?;
            validate_url(
                &format!("locations[{}].booking_link", index),
                &location.booking_link,
            )?;
        }
        validate_unique(
            "locations.name",
            self.locations.iter().map(|location| location.name.as_str()),
        )?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.schedule.interval_seconds)
    }

    fn deduplicate(&self) -> bool {
        self.schedule.deduplicate
    }

    fn failure_policy(&self) -> SiteFailurePolicy {
        self.schedule.on_site_failure
    }

    fn message_template(&self) -> &str {
        &self.message.template
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}
