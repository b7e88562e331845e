// ==========================================
// 传感器告警模拟 - 读数来源
// ==========================================
// 职责: 定义读数生成 trait, 使随机来源可替换
// 实现:
// - RandomReadingSource: 均匀分布随机数, 可指定种子复现
// - SequenceReadingSource: 循环返回固定读数 (测试替身)
// ==========================================

use crate::domain::SensorReading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 读数来源
pub trait ReadingSource {
    /// 生成一次读数
    fn generate(&mut self) -> SensorReading;
}

impl<F> ReadingSource for F
where
    F: FnMut() -> SensorReading,
{
    fn generate(&mut self) -> SensorReading {
        self()
    }
}

// ==========================================
// RandomReadingSource - 随机读数
// ==========================================
// temperature ∈ [0,50) 取整, humidity ∈ [0,100) 取整, ph ∈ [0,14) 保留一位小数
pub struct RandomReadingSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomReadingSource {
    /// 使用系统熵初始化（每次运行结果不同）
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// 使用固定种子（结果可复现）
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// 按可选种子构建
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl ReadingSource for RandomReadingSource {
    fn generate(&mut self) -> SensorReading {
        let t: f64 = self.rng.random();
        let h: f64 = self.rng.random();
        let p: f64 = self.rng.random();
        SensorReading::from_unit_samples(t, h, p)
    }
}

// ==========================================
// SequenceReadingSource - 固定读数序列
// ==========================================
pub struct SequenceReadingSource {
    readings: Vec<SensorReading>,
    next: usize,
}

impl SequenceReadingSource {
    /// 循环返回给定读数; 空列表时返回全零读数
    pub fn new(readings: Vec<SensorReading>) -> Self {
        Self { readings, next: 0 }
    }

    /// 单个读数, 每次都返回它
    pub fn constant(reading: SensorReading) -> Self {
        Self::new(vec![reading])
    }

    /// 已生成次数
    pub fn generated(&self) -> usize {
        self.next
    }
}

impl ReadingSource for SequenceReadingSource {
    fn generate(&mut self) -> SensorReading {
        let reading = match self.readings.len() {
            0 => SensorReading::new(0.0, 0.0, 0.0),
            len => self.readings[self.next % len],
        };
        self.next += 1;
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_readings_stay_in_range() {
        let mut source = RandomReadingSource::seeded(7);
        for _ in 0..500 {
            let r = source.generate();
            assert!((0.0..50.0).contains(&r.temperature));
            assert!((0.0..100.0).contains(&r.humidity));
            assert!((0.0..=14.0).contains(&r.ph));
            assert_eq!(r.temperature.fract(), 0.0);
            assert_eq!(r.humidity.fract(), 0.0);
            assert!(((r.ph * 10.0).round() - r.ph * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_readings() {
        let mut a = RandomReadingSource::seeded(42);
        let mut b = RandomReadingSource::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.generate(), b.generate());
        }
        assert_eq!(a.seed(), Some(42));
        assert_eq!(RandomReadingSource::with_seed(None).seed(), None);
    }

    #[test]
    fn test_sequence_cycles() {
        let r1 = SensorReading::new(35.0, 50.0, 7.0);
        let r2 = SensorReading::new(10.0, 20.0, 3.5);
        let mut source = SequenceReadingSource::new(vec![r1, r2]);
        assert_eq!(source.generate(), r1);
        assert_eq!(source.generate(), r2);
        assert_eq!(source.generate(), r1);
        assert_eq!(source.generated(), 3);
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            SensorReading::new(1.0, 2.0, 3.0)
        };
        assert_eq!(ReadingSource::generate(&mut source).ph, 3.0);
        drop(source);
        assert_eq!(calls, 1);
    }
}
