// ==========================================
// 传感器告警模拟 - 阈值配置
// ==========================================
// 三个阈值在点击时从输入框读取并解析
// 红线: 三个值必须全部解析为有限数字, 不接受部分配置
// ==========================================

use crate::domain::types::ThresholdField;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 阈值解析失败
#[derive(Error, Debug, Clone, PartialEq)]
#[error("阈值无效 (field={field}): {raw:?}")]
pub struct InvalidThreshold {
    pub field: ThresholdField,
    pub raw: String,
}

// ==========================================
// ThresholdConfig - 阈值配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub temp_max: f64,     // 最高温度 (°C)
    pub humidity_min: f64, // 最低湿度 (%)
    pub ph_min: f64,       // 最低 pH
}

impl ThresholdConfig {
    /// 从三个原始输入字符串解析
    ///
    /// # 规则
    /// - 与浏览器 parseFloat 一致: 忽略前导空白, 取最长数字前缀 ("30abc" -> 30)
    /// - 无数字前缀 / 空串 / 非有限值 -> 拒绝
    /// - 按 tempMax -> humidityMin -> phMin 顺序报告第一个失败字段
    pub fn parse(temp_max: &str, humidity_min: &str, ph_min: &str) -> Result<Self, InvalidThreshold> {
        Ok(Self {
            temp_max: parse_field(ThresholdField::TempMax, temp_max)?,
            humidity_min: parse_field(ThresholdField::HumidityMin, humidity_min)?,
            ph_min: parse_field(ThresholdField::PhMin, ph_min)?,
        })
    }
}

fn parse_field(field: ThresholdField, raw: &str) -> Result<f64, InvalidThreshold> {
    parse_float_prefix(raw)
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidThreshold {
            field,
            raw: raw.to_string(),
        })
}

/// 解析字符串的数字前缀（parseFloat 语义）
///
/// 返回 None 表示没有任何可解析的数字前缀。
/// "Infinity" 前缀会返回无穷值, 由调用方决定是否接受。
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // 指数部分只有在后面跟数字时才计入
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
