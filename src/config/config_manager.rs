// ==========================================
// 传感器告警模拟 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验、快照
// 优先级: 环境变量 > 配置文件 > 默认值
// 存储: JSON 文件 (默认位于用户配置目录)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::simulator_config::SimulatorConfig;
use std::path::{Path, PathBuf};

// ==========================================
// 配置键与环境变量
// ==========================================
pub mod config_keys {
    // 配置文件键
    pub const LOCALE: &str = "locale";
    pub const INPUT_IDS: &str = "input_ids";
    pub const TRIGGER_STRATEGIES: &str = "trigger_strategies";
    pub const SEED: &str = "seed";
    pub const MAX_ENTRIES: &str = "max_entries";

    // 环境变量
    pub const ENV_CONFIG_PATH: &str = "SENSOR_ALERT_SIM_CONFIG";
    pub const ENV_LOCALE: &str = "SENSOR_ALERT_SIM_LOCALE";
    pub const ENV_SEED: &str = "SENSOR_ALERT_SIM_SEED";
    pub const ENV_MAX_ENTRIES: &str = "SENSOR_ALERT_SIM_MAX_ENTRIES";
}

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Inline,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: SimulatorConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: SimulatorConfig::default(),
            source: ConfigSource::Defaults,
        }
    }

    /// 从 JSON 文本创建
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let config: SimulatorConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(Self {
            config,
            source: ConfigSource::Inline,
        })
    }

    /// 从配置文件创建
    ///
    /// # 参数
    /// - path: JSON 配置文件路径
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manager = Self::from_json(&raw)?;
        manager.source = ConfigSource::File(path.to_path_buf());
        Ok(manager)
    }

    /// 按默认路径加载, 文件不存在时回退到默认配置, 然后应用环境变量覆写
    pub fn load() -> ConfigResult<Self> {
        let path = get_default_config_path();
        let mut manager = if path.exists() {
            Self::from_file(&path)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::with_defaults()
        };
        manager.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(manager)
    }

    /// 应用环境变量覆写
    ///
    /// # 参数
    /// - lookup: 环境变量读取函数（便于测试注入）
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(locale) = read(config_keys::ENV_LOCALE) {
            self.config.locale = locale;
        }
        if let Some(raw) = read(config_keys::ENV_SEED) {
            let seed = raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: config_keys::SEED.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?;
            self.config.seed = Some(seed);
        }
        if let Some(raw) = read(config_keys::ENV_MAX_ENTRIES) {
            let max = raw.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                key: config_keys::MAX_ENTRIES.to_string(),
                value: raw.clone(),
                message: e.to_string(),
            })?;
            self.config.max_entries = Some(max);
        }

        self.config.validate()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn into_config(self) -> SimulatorConfig {
        self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 获取当前配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 启动时写入日志, 便于复现一次模拟
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

/// 默认配置文件路径
///
/// 优先使用 SENSOR_ALERT_SIM_CONFIG, 否则为 <config_dir>/sensor-alert-sim/config.json
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(config_keys::ENV_CONFIG_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("sensor-alert-sim").join("config.json"),
        None => PathBuf::from("./sensor-alert-sim.json"),
    }
}
