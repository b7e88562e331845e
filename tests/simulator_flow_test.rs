// ==========================================
// 告警模拟组件 - 端到端流程测试
// ==========================================
// 覆盖: 按钮可用性、单次评估、多条告警顺序、无效阈值、test_alerts、列表上限
// ==========================================

mod helpers;

use helpers::simulator_fixture::{fill_thresholds, item_severity, item_title, list_items, mount, mount_standard};
use sensor_alert_sim::config::SimulatorConfig;
use sensor_alert_sim::dom::PageLayout;
use sensor_alert_sim::{EvaluationOutcome, Lifecycle, SensorReading, Severity, ThresholdField};

#[test]
fn test_concrete_warning_scenario() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(35.0, 50.0, 7.0)]);
    assert_eq!(sim.state(), Lifecycle::Ready);
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);

    let outcome = sim.click(&mut page).unwrap().expect("click should evaluate");
    let entries = outcome.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Warning);
    assert_eq!(entries[0].title, "Temperatura Alta");
    assert!(entries[0].message.contains("35"));
    assert!(entries[0].message.contains("30"));
    assert_eq!(entries[0].time_label, "Justo ahora");

    let items = list_items(&sim, &page);
    assert_eq!(items.len(), 1);
    assert_eq!(item_severity(&page, items[0]), "warning");
    assert_eq!(item_title(&page, items[0]), "Temperatura Alta");
}

#[test]
fn test_all_clear_entry() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(25.0, 60.0, 7.2)]);
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);

    let outcome = sim.click(&mut page).unwrap().unwrap();
    assert_eq!(outcome.entries().len(), 1);
    assert_eq!(outcome.entries()[0].severity, Severity::Info);
    assert_eq!(outcome.entries()[0].message, "Temp: 25°C · Humedad: 60% · pH: 7.2");

    let items = list_items(&sim, &page);
    assert_eq!(item_severity(&page, items[0]), "info");
    assert_eq!(item_title(&page, items[0]), "Todo en Orden ✅");
}

#[test]
fn test_multiple_breaches_prepended_in_fixed_order() {
    let (mut sim, mut page) = mount_standard(vec![
        SensorReading::new(20.0, 60.0, 7.0),
        SensorReading::new(45.0, 20.0, 5.0),
    ]);
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);

    sim.click(&mut page).unwrap();
    let outcome = sim.click(&mut page).unwrap().unwrap();
    let severities: Vec<Severity> = outcome.entries().iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Critical, Severity::Critical]);

    let titles: Vec<String> = list_items(&sim, &page)
        .into_iter()
        .map(|item| item_title(&page, item))
        .collect();
    assert_eq!(
        titles,
        vec!["pH Crítico", "Humedad Crítica", "Temperatura Alta", "Todo en Orden ✅"]
    );
}

#[test]
fn test_boundaries_are_strict() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(30.0, 40.0, 6.5)]);
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);

    let outcome = sim.click(&mut page).unwrap().unwrap();
    assert_eq!(outcome.entries().len(), 1);
    assert_eq!(outcome.entries()[0].severity, Severity::Info);
}

#[test]
fn test_trigger_gating() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(35.0, 50.0, 7.0)]);
    let trigger = sim.bindings().unwrap().trigger;
    assert!(page.document().is_disabled(trigger).unwrap());

    fill_thresholds(&mut sim, &mut page, ["", "40", "6.5"]);
    assert!(page.document().is_disabled(trigger).unwrap());
    assert_eq!(sim.click(&mut page).unwrap(), None);
    assert!(list_items(&sim, &page).is_empty());

    sim.input(&mut page, ThresholdField::TempMax, "30").unwrap();
    assert!(!page.document().is_disabled(trigger).unwrap());
}

#[test]
fn test_invalid_threshold_shows_notice() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(35.0, 50.0, 7.0)]);
    fill_thresholds(&mut sim, &mut page, ["abc", "40", "6.5"]);

    let outcome = sim.click(&mut page).unwrap().unwrap();
    match outcome {
        EvaluationOutcome::Rejected(invalid) => {
            assert_eq!(invalid.field, ThresholdField::TempMax);
            assert_eq!(invalid.raw, "abc");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(list_items(&sim, &page).is_empty());
    assert_eq!(
        page.dialogs(),
        ["Uno o más valores de configuración no son válidos. Revisa los inputs."]
    );

    // 组件仍可用
    sim.input(&mut page, ThresholdField::TempMax, "30").unwrap();
    let outcome = sim.click(&mut page).unwrap().unwrap();
    assert_eq!(outcome.entries().len(), 1);
    assert_eq!(list_items(&sim, &page).len(), 1);
}

#[test]
fn test_lenient_number_prefix() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(35.0, 50.0, 7.0)]);
    fill_thresholds(&mut sim, &mut page, ["30abc", "40", "6.5"]);

    match sim.click(&mut page).unwrap().unwrap() {
        EvaluationOutcome::Rendered { thresholds, .. } => assert_eq!(thresholds.temp_max, 30.0),
        other => panic!("expected render, got {:?}", other),
    }
}

#[test]
fn test_test_alerts_uses_click_path() {
    let (mut sim, mut page) = mount_standard(vec![SensorReading::new(35.0, 50.0, 7.0)]);

    // 按钮禁用时不产生条目
    sim.test_alerts(&mut page);
    assert!(list_items(&sim, &page).is_empty());
    assert_eq!(sim.source_mut().generated(), 0);

    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);
    sim.test_alerts(&mut page);
    sim.test_alerts(&mut page);
    assert_eq!(list_items(&sim, &page).len(), 2);
    assert_eq!(sim.source_mut().generated(), 2);
}

#[test]
fn test_max_entries_keeps_newest() {
    let config = SimulatorConfig {
        max_entries: Some(2),
        ..SimulatorConfig::default()
    };
    let (mut sim, mut page) = mount(
        PageLayout::standard(),
        config,
        vec![
            SensorReading::new(35.0, 50.0, 7.0),
            SensorReading::new(20.0, 60.0, 7.0),
            SensorReading::new(20.0, 10.0, 7.0),
        ],
    );
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);
    for _ in 0..3 {
        sim.click(&mut page).unwrap();
    }

    let titles: Vec<String> = list_items(&sim, &page)
        .into_iter()
        .map(|item| item_title(&page, item))
        .collect();
    assert_eq!(titles, vec!["Humedad Crítica", "Todo en Orden ✅"]);
}

#[test]
fn test_english_locale() {
    let config = SimulatorConfig {
        locale: "en".to_string(),
        ..SimulatorConfig::default()
    };
    let (mut sim, mut page) = mount(
        PageLayout::standard(),
        config,
        vec![SensorReading::new(20.0, 60.0, 5.0)],
    );
    fill_thresholds(&mut sim, &mut page, ["30", "40", "6.5"]);

    let outcome = sim.click(&mut page).unwrap().unwrap();
    assert_eq!(outcome.entries()[0].title, "Critical pH");
    assert_eq!(outcome.entries()[0].message, "Current pH: 5.0 (Minimum: 6.5)");
    assert_eq!(outcome.entries()[0].time_label, "Just now");
}
