// ==========================================
// 传感器告警模拟 - 告警规则引擎
// ==========================================
// 输入: 阈值配置 + 读数
// 输出: 告警条目列表 (按固定顺序: 温度 -> 湿度 -> pH)
// 规则:
// 1. temperature > temp_max     -> warning  "Temperatura Alta"
// 2. humidity    < humidity_min -> critical "Humedad Crítica"
// 3. ph          < ph_min       -> critical "pH Crítico"
// 均未触发时输出唯一一条 info "Todo en Orden"
// ==========================================

use crate::domain::{AlertEntry, SensorReading, Severity, ThresholdConfig};
use crate::i18n::{t, t_with_args, DEFAULT_LOCALE};
use serde::{Deserialize, Serialize};

/// 触发的规则类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Breach {
    TemperatureHigh,
    HumidityLow,
    PhLow,
}

impl Breach {
    pub fn severity(&self) -> Severity {
        match self {
            Breach::TemperatureHigh => Severity::Warning,
            Breach::HumidityLow | Breach::PhLow => Severity::Critical,
        }
    }

    fn i18n_key(&self) -> &'static str {
        match self {
            Breach::TemperatureHigh => "alert.temperature_high",
            Breach::HumidityLow => "alert.humidity_critical",
            Breach::PhLow => "alert.ph_critical",
        }
    }
}

/// 按固定顺序检查三条规则
pub fn detect_breaches(thresholds: &ThresholdConfig, reading: &SensorReading) -> Vec<Breach> {
    let mut breaches = Vec::with_capacity(3);
    if reading.temperature > thresholds.temp_max {
        breaches.push(Breach::TemperatureHigh);
    }
    if reading.humidity < thresholds.humidity_min {
        breaches.push(Breach::HumidityLow);
    }
    if reading.ph < thresholds.ph_min {
        breaches.push(Breach::PhLow);
    }
    breaches
}

// ==========================================
// AlertRuleEngine - 告警规则引擎
// ==========================================
// 无状态引擎, 仅持有输出语言
pub struct AlertRuleEngine {
    locale: String,
}

impl Default for AlertRuleEngine {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl AlertRuleEngine {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
        }
    }

    /// 评估一次读数, 返回按发出顺序排列的告警条目（至少一条）
    pub fn evaluate(&self, thresholds: &ThresholdConfig, reading: &SensorReading) -> Vec<AlertEntry> {
        let breaches = detect_breaches(thresholds, reading);
        if breaches.is_empty() {
            return vec![self.all_clear_entry(reading)];
        }
        breaches
            .iter()
            .map(|b| self.breach_entry(*b, thresholds, reading))
            .collect()
    }

    fn breach_entry(&self, breach: Breach, thresholds: &ThresholdConfig, reading: &SensorReading) -> AlertEntry {
        let (current, limit) = match breach {
            Breach::TemperatureHigh => (reading.temperature_label(), format_number(thresholds.temp_max)),
            Breach::HumidityLow => (reading.humidity_label(), format_number(thresholds.humidity_min)),
            Breach::PhLow => (reading.ph_label(), format_number(thresholds.ph_min)),
        };
        let key = breach.i18n_key();
        AlertEntry::new(
            breach.severity(),
            t(&self.locale, &format!("{}.title", key)),
            t_with_args(
                &self.locale,
                &format!("{}.message", key),
                &[("current", current.as_str()), ("limit", limit.as_str())],
            ),
            t(&self.locale, "alert.just_now"),
        )
    }

    fn all_clear_entry(&self, reading: &SensorReading) -> AlertEntry {
        let temperature = reading.temperature_label();
        let humidity = reading.humidity_label();
        let ph = reading.ph_label();
        AlertEntry::new(
            Severity::Info,
            t(&self.locale, "alert.all_clear.title"),
            t_with_args(
                &self.locale,
                "alert.all_clear.message",
                &[
                    ("temperature", temperature.as_str()),
                    ("humidity", humidity.as_str()),
                    ("ph", ph.as_str()),
                ],
            ),
            t(&self.locale, "alert.just_now"),
        )
    }
}

/// 阈值展示: 整数不带小数点 (30), 其余按最短表示 (6.5);
/// |v| >= 1e21 或 |v| < 1e-6 时用指数形式 (-1e+21, 1.5e-7)
fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exp = format!("{:e}", v);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    format!("{}", v)
}
