//! 配置服务
//!
//! JSON 配置文件：`$COUCHTUBE_CONFIG`，否则 `<config_dir>/couchtube/config.json`。
//! 文件不存在时使用默认值。

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use couchtube_core::services::DEFAULT_REGION;
use couchtube_core::PlaybackSettings;
use couchtube_provider::{SourceSettings, DEFAULT_PIPED_INSTANCES};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "COUCHTUBE_CONFIG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 实例，按优先级排列
    pub instances: Vec<String>,
    /// 趋势地区
    pub region: String,
    /// 单个实例的超时（秒），0 表示不限制
    pub attempt_timeout_secs: u64,
    pub language: String,
    pub theme: Theme,
    /// `RUST_LOG` 未设置时的日志级别
    pub log_level: String,
    pub playback: PlaybackSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instances: DEFAULT_PIPED_INSTANCES
                .iter()
                .map(ToString::to_string)
                .collect(),
            region: DEFAULT_REGION.to_string(),
            attempt_timeout_secs: 10,
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
            log_level: "info".to_string(),
            playback: PlaybackSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            instances: self.instances.clone(),
            attempt_timeout: (self.attempt_timeout_secs > 0)
                .then(|| Duration::from_secs(self.attempt_timeout_secs)),
        }
    }

    /// 配置的语言；无法识别时回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用环境变量或默认位置
    pub fn from_env() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(default_config_path()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("couchtube")
        .join("config.json")
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
