use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

thread_local! {
    static PERF_DEPTH: Cell<u32> = const { Cell::new(0) };
    static DOM_MUTATION_COUNT: Cell<u64> = const { Cell::new(0) };
}

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 读取 perf 开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭
/// - `SENSOR_ALERT_SIM_PERF=1` 强制开启, `=0` 强制关闭
pub fn install_from_env() {
    let enabled = match std::env::var("SENSOR_ALERT_SIM_PERF") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    };
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

/// 记录一次文档修改（仅在 PerfGuard 作用域内计数）
pub fn record_dom_mutation() {
    if !PERF_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let active = PERF_DEPTH.with(|d| d.get() > 0);
    if !active {
        return;
    }
    DOM_MUTATION_COUNT.with(|c| c.set(c.get().saturating_add(1)));
}

/// 当前线程累计的文档修改次数
pub fn dom_mutation_count() -> u64 {
    DOM_MUTATION_COUNT.with(|c| c.get())
}

/// 性能统计 Guard：记录 elapsed_ms + 文档修改次数
///
/// 使用方式：
/// ```ignore
/// let _perf = sensor_alert_sim::perf::PerfGuard::new("evaluate");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    mutation_start: u64,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        PERF_DEPTH.with(|d| d.set(d.get().saturating_add(1)));
        Self {
            op,
            start: Instant::now(),
            mutation_start: dom_mutation_count(),
        }
    }

    /// 本 Guard 作用域内的文档修改次数
    pub fn mutations(&self) -> u64 {
        dom_mutation_count().saturating_sub(self.mutation_start)
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        let dom_mutations = self.mutations();

        if PERF_ENABLED.load(Ordering::Relaxed) {
            tracing::info!(
                target: "perf",
                op = self.op,
                elapsed_ms,
                dom_mutations,
                "done"
            );
        }

        PERF_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
