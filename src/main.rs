// ==========================================
// 传感器告警模拟 - 命令行入口
// ==========================================
// 用法:
//   sensor-alert-sim run <layout.json> <tempMax> <humidityMin> <phMin> [clicks]
//   sensor-alert-sim demo
// 输出: 告警列表 HTML 与弹窗消息
// ==========================================

use anyhow::{bail, Context, Result};
use sensor_alert_sim::config::ConfigManager;
use sensor_alert_sim::dom::{Page, PageLayout};
use sensor_alert_sim::{logging, perf, AlertSimulator, Lifecycle, ThresholdField};
use std::path::Path;

const USAGE: &str = "usage:\n  sensor-alert-sim run <layout.json> <tempMax> <humidityMin> <phMin> [clicks]\n  sensor-alert-sim demo";

fn main() -> Result<()> {
    logging::init();
    perf::install_from_env();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("run") => {
            if args.len() < 5 {
                bail!("missing arguments\n{}", USAGE);
            }
            let layout = load_layout(Path::new(&args[1]))?;
            let clicks = match args.get(5) {
                Some(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid click count: {}", raw))?,
                None => 1,
            };
            simulate(layout, [&args[2], &args[3], &args[4]], clicks)
        }
        Some("demo") => simulate(PageLayout::standard(), ["30", "40", "6.5"], 3),
        _ => bail!(USAGE),
    }
}

fn load_layout(path: &Path) -> Result<PageLayout> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout: {}", path.display()))?;
    Ok(PageLayout::from_json(&raw)?)
}

fn simulate(layout: PageLayout, values: [&str; 3], clicks: usize) -> Result<()> {
    let manager = ConfigManager::load()?;
    tracing::info!(
        version = sensor_alert_sim::VERSION,
        source = ?manager.source(),
        config = %manager.get_config_snapshot()?,
        "{} starting",
        sensor_alert_sim::APP_NAME
    );

    let mut page = Page::new(layout.build()?);
    let mut simulator = AlertSimulator::from_config(manager.into_config());

    if simulator.initialize(&mut page) == Lifecycle::Failed {
        println!("{}", page.document().outer_html(page.document().body())?);
        match simulator.failure() {
            Some(err) => bail!("simulator failed to initialize: {}", err),
            None => bail!("simulator failed to initialize"),
        }
    }

    for (field, value) in ThresholdField::ALL.into_iter().zip(values) {
        simulator.input(&mut page, field, value)?;
    }
    for _ in 0..clicks {
        simulator.test_alerts(&mut page);
    }

    if let Some(bindings) = simulator.bindings() {
        println!("{}", page.document().outer_html(bindings.list)?);
    }
    for message in page.take_dialogs() {
        println!("[dialog] {}", message);
    }
    Ok(())
}
