// ==========================================
// 传感器告警模拟 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::dom::SelectorError;
use std::path::PathBuf;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("配置中的选择器无效: {0}")]
    Selector(#[from] SelectorError),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
