// ==========================================
// 传感器告警模拟 - 组件配置
// ==========================================
// 默认值与宿主页面约定一致:
// - 输入框 id: tempMax / humidityMin / phMin
// - 按钮查找链: .alert-config button -> .alert-config .btn-primary -> 任意按钮
// - 列表: .alert-list (缺失时在 .alert-display 或 body 下创建)
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::config_keys;
use crate::dom::{LookupStrategy, Selector};
use crate::domain::ThresholdField;
use crate::i18n;
use serde::{Deserialize, Serialize};

/// 三个阈值输入框的元素 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputIds {
    pub temp_max: String,
    pub humidity_min: String,
    pub ph_min: String,
}

impl Default for InputIds {
    fn default() -> Self {
        Self {
            temp_max: ThresholdField::TempMax.default_element_id().to_string(),
            humidity_min: ThresholdField::HumidityMin.default_element_id().to_string(),
            ph_min: ThresholdField::PhMin.default_element_id().to_string(),
        }
    }
}

impl InputIds {
    pub fn get(&self, field: ThresholdField) -> &str {
        match field {
            ThresholdField::TempMax => &self.temp_max,
            ThresholdField::HumidityMin => &self.humidity_min,
            ThresholdField::PhMin => &self.ph_min,
        }
    }
}

// ==========================================
// SimulatorConfig - 组件配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// 输出语言 (es / en)
    pub locale: String,
    /// 阈值输入框 id
    pub input_ids: InputIds,
    /// 配置区容器选择器 (横幅插入位置)
    pub config_container: String,
    /// 触发按钮查找链 (按顺序尝试; None 时由 config_container 推导)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_strategies: Option<Vec<LookupStrategy>>,
    /// 告警列表选择器
    pub list_selector: String,
    /// 告警列表缺失时的挂载容器选择器
    pub display_selector: String,
    /// 动态创建列表时使用的 class
    pub list_class: String,
    /// 按钮禁用时附加的 class
    pub disabled_class: String,
    /// 随机种子 (None 表示使用系统熵)
    pub seed: Option<u64>,
    /// 列表条目上限 (None 表示不限)
    pub max_entries: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            input_ids: InputIds::default(),
            config_container: ".alert-config".to_string(),
            trigger_strategies: None,
            list_selector: ".alert-list".to_string(),
            display_selector: ".alert-display".to_string(),
            list_class: "alert-list".to_string(),
            disabled_class: "btn-disabled".to_string(),
            seed: None,
            max_entries: None,
        }
    }
}

/// 默认按钮查找链, 前两级限定在配置区容器内
pub fn default_trigger_strategies(container: &str) -> Vec<LookupStrategy> {
    vec![
        LookupStrategy::new("config-button", format!("{} button", container)),
        LookupStrategy::new("config-primary", format!("{} .btn-primary", container)),
        LookupStrategy::new("any-button", "button[type=\"button\"], button"),
    ]
}

impl SimulatorConfig {
    /// 实际使用的按钮查找链
    pub fn trigger_chain(&self) -> Vec<LookupStrategy> {
        match &self.trigger_strategies {
            Some(strategies) => strategies.clone(),
            None => default_trigger_strategies(&self.config_container),
        }
    }

    /// 校验配置
    ///
    /// # 规则
    /// - locale 必须受支持
    /// - 输入框 id 非空
    /// - 查找链非空, 所有选择器可解析
    /// - max_entries 不能为 0
    pub fn validate(&self) -> ConfigResult<()> {
        if !i18n::is_supported(&self.locale) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::LOCALE.to_string(),
                value: self.locale.clone(),
                message: format!("支持的语言: {}", i18n::SUPPORTED_LOCALES.join(", ")),
            });
        }

        for field in ThresholdField::ALL {
            if self.input_ids.get(field).trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("{}.{}", config_keys::INPUT_IDS, field),
                    value: String::new(),
                    message: "元素 id 不能为空".to_string(),
                });
            }
        }

        if matches!(&self.trigger_strategies, Some(s) if s.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::TRIGGER_STRATEGIES.to_string(),
                value: "[]".to_string(),
                message: "至少需要一个查找策略".to_string(),
            });
        }
        for strategy in self.trigger_chain() {
            strategy.compile()?;
        }
        for selector in [&self.config_container, &self.list_selector, &self.display_selector] {
            Selector::parse(selector)?;
        }

        if self.max_entries == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::MAX_ENTRIES.to_string(),
                value: "0".to_string(),
                message: "上限必须大于 0".to_string(),
            });
        }
        Ok(())
    }
}
