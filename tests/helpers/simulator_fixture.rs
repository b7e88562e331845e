// ==========================================
// 组件装配 - 用于集成测试
// ==========================================

use sensor_alert_sim::config::SimulatorConfig;
use sensor_alert_sim::dom::{NodeId, Page, PageLayout};
use sensor_alert_sim::engine::SequenceReadingSource;
use sensor_alert_sim::{AlertSimulator, SensorReading, ThresholdField};

pub type TestSimulator = AlertSimulator<SequenceReadingSource>;

/// 构建页面与组件并初始化
pub fn mount(
    layout: PageLayout,
    config: SimulatorConfig,
    readings: Vec<SensorReading>,
) -> (TestSimulator, Page) {
    sensor_alert_sim::logging::init_test();
    let mut page = Page::new(layout.build().expect("layout should build"));
    let mut simulator = AlertSimulator::new(config, SequenceReadingSource::new(readings));
    simulator.initialize(&mut page);
    (simulator, page)
}

/// 标准页面 + 默认配置
pub fn mount_standard(readings: Vec<SensorReading>) -> (TestSimulator, Page) {
    mount(PageLayout::standard(), SimulatorConfig::default(), readings)
}

/// 依次填写三个阈值输入
pub fn fill_thresholds(simulator: &mut TestSimulator, page: &mut Page, values: [&str; 3]) {
    for (field, value) in ThresholdField::ALL.into_iter().zip(values) {
        simulator
            .input(page, field, value)
            .expect("input should be dispatched");
    }
}

/// 告警列表中的条目（自上而下）
pub fn list_items(simulator: &TestSimulator, page: &Page) -> Vec<NodeId> {
    let list = simulator.bindings().expect("simulator should be ready").list;
    page.document().children(list).expect("list exists").to_vec()
}

/// 条目标题
pub fn item_title(page: &Page, item: NodeId) -> String {
    let html = page.document().inner_html(item).expect("item exists");
    let start = html.find("alert-title\">").expect("title div") + "alert-title\">".len();
    let end = start + html[start..].find("</div>").expect("title end");
    html[start..end].to_string()
}

/// 条目级别 class
pub fn item_severity(page: &Page, item: NodeId) -> String {
    let class = page
        .document()
        .attribute(item, "class")
        .expect("item exists")
        .unwrap_or_default();
    class
        .split_whitespace()
        .find(|c| *c != "alert-item")
        .unwrap_or_default()
        .to_string()
}
