// ==========================================
// 传感器告警模拟 - 传感器读数
// ==========================================
// 每次评估生成一次, 不持久化
// 温度/湿度取整, pH 保留一位小数 (与原行为保持一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 温度取值上界（不含）
pub const TEMPERATURE_RANGE: f64 = 50.0;
/// 湿度取值上界（不含）
pub const HUMIDITY_RANGE: f64 = 100.0;
/// pH 取值上界（不含, 舍入前）
pub const PH_RANGE: f64 = 14.0;

// ==========================================
// SensorReading - 单次读数快照
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64, // °C, 整数
    pub humidity: f64,    // %, 整数
    pub ph: f64,          // 一位小数
}

impl SensorReading {
    pub fn new(temperature: f64, humidity: f64, ph: f64) -> Self {
        Self {
            temperature,
            humidity,
            ph,
        }
    }

    /// 由三个 [0,1) 均匀样本换算读数
    ///
    /// temperature = floor(u * 50), humidity = floor(u * 100),
    /// ph = round1(u * 14)
    pub fn from_unit_samples(t: f64, h: f64, p: f64) -> Self {
        Self {
            temperature: (t * TEMPERATURE_RANGE).floor(),
            humidity: (h * HUMIDITY_RANGE).floor(),
            ph: round_one_decimal(p * PH_RANGE),
        }
    }

    /// 温度展示文本
    pub fn temperature_label(&self) -> String {
        format!("{}", self.temperature)
    }

    /// 湿度展示文本
    pub fn humidity_label(&self) -> String {
        format!("{}", self.humidity)
    }

    /// pH 展示文本（固定一位小数: 7 -> "7.0"）
    pub fn ph_label(&self) -> String {
        format!("{:.1}", self.ph)
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature={} humidity={} ph={}",
            self.temperature_label(),
            self.humidity_label(),
            self.ph_label()
        )
    }
}

/// 四舍五入到一位小数
pub fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_samples_truncates_and_rounds() {
        let r = SensorReading::from_unit_samples(0.999, 0.5, 0.5);
        assert_eq!(r.temperature, 49.0);
        assert_eq!(r.humidity, 50.0);
        assert_eq!(r.ph, 7.0);

        let r = SensorReading::from_unit_samples(0.0, 0.0, 0.0);
        assert_eq!(r.temperature, 0.0);
        assert_eq!(r.humidity, 0.0);
        assert_eq!(r.ph, 0.0);
    }

    #[test]
    fn test_ph_keeps_one_decimal_while_others_are_integers() {
        let r = SensorReading::from_unit_samples(0.7012, 0.4567, 0.4567);
        assert_eq!(r.temperature.fract(), 0.0);
        assert_eq!(r.humidity.fract(), 0.0);
        assert_eq!(r.ph, 6.4);
        assert_eq!(r.ph_label(), "6.4");
    }

    #[test]
    fn test_labels() {
        let r = SensorReading::new(35.0, 50.0, 7.0);
        assert_eq!(r.temperature_label(), "35");
        assert_eq!(r.humidity_label(), "50");
        assert_eq!(r.ph_label(), "7.0");
        assert_eq!(r.to_string(), "temperature=35 humidity=50 ph=7.0");
    }
}
