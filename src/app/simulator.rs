// ==========================================
// 传感器告警模拟 - 告警模拟组件
// ==========================================
// 生命周期: Uninitialized -> Ready | Failed (终态)
// 事件:
// - Input: 三个输入框全部非空时启用按钮, 否则禁用
// - Click: 解析阈值 -> 生成读数 -> 规则评估 -> 渲染条目
// 边界: 事件处理中的任何错误都在此记录并吞掉, 不向宿主传播
// ==========================================

use crate::app::error::{SimulatorError, SimulatorResult};
use crate::config::SimulatorConfig;
use crate::dom::{resolve_first, Document, DomEvent, NodeId, Page, Selector};
use crate::domain::{AlertEntry, InvalidThreshold, Lifecycle, SensorReading, ThresholdConfig, ThresholdField};
use crate::engine::{render_banner, AlertListRenderer, AlertRuleEngine, BannerKind, RandomReadingSource, ReadingSource};
use crate::i18n::{t, t_with_args};
use crate::perf::PerfGuard;

// ==========================================
// Bindings - 已解析的页面元素
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub temp_max: NodeId,
    pub humidity_min: NodeId,
    pub ph_min: NodeId,
    pub trigger: NodeId,
    /// 命中的按钮查找策略名称
    pub trigger_strategy: String,
    pub list: NodeId,
    /// 列表是否为动态创建
    pub list_created: bool,
}

impl Bindings {
    pub fn input(&self, field: ThresholdField) -> NodeId {
        match field {
            ThresholdField::TempMax => self.temp_max,
            ThresholdField::HumidityMin => self.humidity_min,
            ThresholdField::PhMin => self.ph_min,
        }
    }

    fn is_input(&self, node: NodeId) -> bool {
        node == self.temp_max || node == self.humidity_min || node == self.ph_min
    }

    /// 三个输入框的当前原始值
    fn raw_values(&self, doc: &Document) -> SimulatorResult<[String; 3]> {
        Ok([
            doc.value(self.temp_max)?.to_string(),
            doc.value(self.humidity_min)?.to_string(),
            doc.value(self.ph_min)?.to_string(),
        ])
    }
}

// ==========================================
// EvaluationOutcome - 单次评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// 阈值无效, 未生成条目
    Rejected(InvalidThreshold),
    /// 已渲染条目（按发出顺序）
    Rendered {
        thresholds: ThresholdConfig,
        reading: SensorReading,
        entries: Vec<AlertEntry>,
        nodes: Vec<NodeId>,
    },
}

impl EvaluationOutcome {
    pub fn entries(&self) -> &[AlertEntry] {
        match self {
            EvaluationOutcome::Rejected(_) => &[],
            EvaluationOutcome::Rendered { entries, .. } => entries,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, EvaluationOutcome::Rejected(_))
    }
}

// ==========================================
// AlertSimulator - 告警模拟组件
// ==========================================
pub struct AlertSimulator<S = RandomReadingSource> {
    config: SimulatorConfig,
    source: S,
    rules: AlertRuleEngine,
    state: Lifecycle,
    bindings: Option<Bindings>,
    failure: Option<SimulatorError>,
}

impl AlertSimulator<RandomReadingSource> {
    /// 按配置创建, 使用随机读数来源（配置了 seed 时可复现）
    pub fn from_config(config: SimulatorConfig) -> Self {
        let source = RandomReadingSource::with_seed(config.seed);
        Self::new(config, source)
    }
}

impl<S: ReadingSource> AlertSimulator<S> {
    /// 创建组件（尚未绑定页面）
    pub fn new(config: SimulatorConfig, source: S) -> Self {
        let rules = AlertRuleEngine::new(&config.locale);
        Self {
            config,
            source,
            rules,
            state: Lifecycle::Uninitialized,
            bindings: None,
            failure: None,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        self.bindings.as_ref()
    }

    /// 初始化失败原因（仅 Failed 状态）
    pub fn failure(&self) -> Option<&SimulatorError> {
        self.failure.as_ref()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // ==========================================
    // 初始化
    // ==========================================

    /// 绑定页面元素并进入 Ready / Failed
    ///
    /// 重复调用不会重新绑定, 直接返回当前状态。
    pub fn initialize(&mut self, page: &mut Page) -> Lifecycle {
        if self.state != Lifecycle::Uninitialized {
            tracing::warn!(state = %self.state, "alert simulator already initialized");
            return self.state;
        }

        match self.try_initialize(page) {
            Ok(bindings) => {
                tracing::info!(
                    trigger_strategy = %bindings.trigger_strategy,
                    list_created = bindings.list_created,
                    "alert simulator ready"
                );
                self.bindings = Some(bindings);
                self.state = Lifecycle::Ready;
            }
            Err(err) => {
                if !err.is_init_failure() {
                    tracing::error!(error = %err, "unexpected error while initializing alert simulator");
                }
                self.failure = Some(err);
                self.state = Lifecycle::Failed;
            }
        }
        self.state
    }

    fn try_initialize(&mut self, page: &mut Page) -> SimulatorResult<Bindings> {
        let locale = self.config.locale.clone();
        let ids = self.config.input_ids.clone();

        let doc = page.document();
        let temp_max = doc.get_element_by_id(&ids.temp_max);
        let humidity_min = doc.get_element_by_id(&ids.humidity_min);
        let ph_min = doc.get_element_by_id(&ids.ph_min);

        let (temp_max, humidity_min, ph_min) = match (temp_max, humidity_min, ph_min) {
            (Some(t), Some(h), Some(p)) => (t, h, p),
            (t, h, p) => {
                tracing::error!(
                    temp_max = t.is_some(),
                    humidity_min = h.is_some(),
                    ph_min = p.is_some(),
                    "FATAL: one or more threshold inputs are missing"
                );
                let missing: Vec<String> = [(&ids.temp_max, t), (&ids.humidity_min, h), (&ids.ph_min, p)]
                    .into_iter()
                    .filter(|(_, node)| node.is_none())
                    .map(|(id, _)| id.clone())
                    .collect();
                let expected = [ids.temp_max.as_str(), ids.humidity_min.as_str(), ids.ph_min.as_str()].join(", ");
                let message = t_with_args(&locale, "notice.missing_inputs", &[("ids", expected.as_str())]);
                self.show_banner(page, BannerKind::Blocking, &message);
                return Err(SimulatorError::MissingInputs { missing });
            }
        };

        let chain = self.config.trigger_chain();
        let trigger = match resolve_first(page.document(), &chain)? {
            Some(resolved) => resolved,
            None => {
                tracing::error!(
                    container = %self.config.config_container,
                    "trigger button not found inside configuration container"
                );
                let message = t_with_args(
                    &locale,
                    "notice.missing_trigger",
                    &[("container", self.config.config_container.as_str())],
                );
                self.show_banner(page, BannerKind::Warning, &message);
                let tried = chain.into_iter().map(|s| s.selector).collect();
                return Err(SimulatorError::MissingTrigger { tried });
            }
        };

        let (list, list_created) = self.resolve_list(page.document_mut())?;

        let bindings = Bindings {
            temp_max,
            humidity_min,
            ph_min,
            trigger: trigger.node,
            trigger_strategy: trigger.strategy,
            list,
            list_created,
        };
        self.apply_trigger_gating(page.document_mut(), &bindings)?;
        Ok(bindings)
    }

    /// 查找告警列表, 缺失时创建
    fn resolve_list(&self, doc: &mut Document) -> SimulatorResult<(NodeId, bool)> {
        if let Some(list) = doc.query_selector(&Selector::parse(&self.config.list_selector)?) {
            return Ok((list, false));
        }

        tracing::warn!(
            selector = %self.config.list_selector,
            "alert list not found, creating a temporary one to show results"
        );
        let parent = doc
            .query_selector(&Selector::parse(&self.config.display_selector)?)
            .unwrap_or_else(|| doc.body());
        let list = doc.create_element("div");
        doc.set_attribute(list, "class", &self.config.list_class)?;
        doc.append_child(parent, list)?;
        Ok((list, true))
    }

    /// 在配置区（或 body）最前插入横幅; 渲染失败只记录, 不覆盖原始初始化错误
    fn show_banner(&self, page: &mut Page, kind: BannerKind, message: &str) {
        if let Err(err) = self.try_show_banner(page, kind, message) {
            tracing::error!(error = %err, ?kind, "failed to render notice banner");
        }
    }

    fn try_show_banner(&self, page: &mut Page, kind: BannerKind, message: &str) -> SimulatorResult<()> {
        let doc = page.document_mut();
        let target = doc
            .query_selector(&Selector::parse(&self.config.config_container)?)
            .unwrap_or_else(|| doc.body());
        render_banner(doc, target, kind, message)?;
        Ok(())
    }

    // ==========================================
    // 事件处理
    // ==========================================

    /// 处理页面事件
    ///
    /// # 返回
    /// - 点击触发按钮时返回评估结果
    /// - 其他事件 / 未就绪 / 内部故障返回 None
    pub fn handle_event(&mut self, page: &mut Page, event: DomEvent) -> Option<EvaluationOutcome> {
        let bindings = match (&self.state, &self.bindings) {
            (Lifecycle::Ready, Some(b)) => b.clone(),
            _ => {
                tracing::debug!(state = %self.state, ?event, "event ignored");
                return None;
            }
        };

        match event {
            DomEvent::Input(node) if bindings.is_input(node) => {
                if let Err(err) = self.apply_trigger_gating(page.document_mut(), &bindings) {
                    tracing::error!(error = %err, "error while updating trigger state");
                }
                None
            }
            DomEvent::Click(node) if node == bindings.trigger => match self.evaluate(page, &bindings) {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    tracing::error!(error = %err, "error in click handler");
                    None
                }
            },
            _ => None,
        }
    }

    /// 设置某个阈值输入并派发 Input 事件
    pub fn input(&mut self, page: &mut Page, field: ThresholdField, value: &str) -> SimulatorResult<()> {
        let node = match &self.bindings {
            Some(b) => b.input(field),
            None => return Err(SimulatorError::NotReady(self.state)),
        };
        let event = page.input(node, value)?;
        self.handle_event(page, event);
        Ok(())
    }

    /// 点击触发按钮（按钮禁用时不会评估）
    pub fn click(&mut self, page: &mut Page) -> SimulatorResult<Option<EvaluationOutcome>> {
        let trigger = match &self.bindings {
            Some(b) => b.trigger,
            None => return Err(SimulatorError::NotReady(self.state)),
        };
        Ok(match page.click(trigger)? {
            Some(event) => self.handle_event(page, event),
            None => None,
        })
    }

    /// 诊断入口: 记录当前输入值并走与用户点击相同的路径
    pub fn test_alerts(&mut self, page: &mut Page) {
        let Some(bindings) = self.bindings.clone() else {
            tracing::warn!(state = %self.state, "test_alerts called before the simulator is ready");
            return;
        };
        match bindings.raw_values(page.document()) {
            Ok([temp_max, humidity_min, ph_min]) => {
                tracing::info!(%temp_max, %humidity_min, %ph_min, "test_alerts quick check");
            }
            Err(err) => tracing::error!(error = %err, "test_alerts could not read inputs"),
        }
        if let Err(err) = self.click(page) {
            tracing::error!(error = %err, "test_alerts click failed");
        }
    }

    /// 按钮可用性: 三个输入全部非空才启用
    ///
    /// # 返回
    /// 更新后按钮是否可用
    fn apply_trigger_gating(&self, doc: &mut Document, bindings: &Bindings) -> SimulatorResult<bool> {
        let enabled = bindings.raw_values(doc)?.iter().all(|v| !v.is_empty());
        doc.set_disabled(bindings.trigger, !enabled)?;
        if enabled {
            doc.remove_class(bindings.trigger, &self.config.disabled_class)?;
        } else {
            doc.add_class(bindings.trigger, &self.config.disabled_class)?;
        }
        tracing::debug!(enabled, "trigger state updated");
        Ok(enabled)
    }

    /// 单次评估
    fn evaluate(&mut self, page: &mut Page, bindings: &Bindings) -> SimulatorResult<EvaluationOutcome> {
        let _perf = PerfGuard::new("evaluate");

        let [temp_max, humidity_min, ph_min] = bindings.raw_values(page.document())?;
        let thresholds = match ThresholdConfig::parse(&temp_max, &humidity_min, &ph_min) {
            Ok(thresholds) => thresholds,
            Err(invalid) => {
                tracing::error!(
                    %temp_max,
                    %humidity_min,
                    %ph_min,
                    field = %invalid.field,
                    "invalid threshold configuration"
                );
                page.alert(t(&self.config.locale, "notice.invalid_config"));
                return Ok(EvaluationOutcome::Rejected(invalid));
            }
        };

        let reading = self.source.generate();
        tracing::info!(
            %reading,
            temp_max = thresholds.temp_max,
            humidity_min = thresholds.humidity_min,
            ph_min = thresholds.ph_min,
            "simulation reading"
        );

        let entries = self.rules.evaluate(&thresholds, &reading);
        let renderer = AlertListRenderer::new(bindings.list, self.config.max_entries);
        let nodes = renderer.prepend_all(page.document_mut(), &entries)?;
        for entry in &entries {
            tracing::debug!(
                entry_id = %entry.entry_id,
                severity = %entry.severity,
                created_at = %entry.created_at,
                "alert entry rendered"
            );
        }

        Ok(EvaluationOutcome::Rendered {
            thresholds,
            reading,
            entries,
            nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::PageLayout;
    use crate::domain::Severity;
    use crate::engine::SequenceReadingSource;

    fn ready(reading: SensorReading) -> (AlertSimulator<SequenceReadingSource>, Page) {
        let mut page = Page::new(PageLayout::standard().build().unwrap());
        let mut sim = AlertSimulator::new(
            SimulatorConfig::default(),
            SequenceReadingSource::constant(reading),
        );
        assert_eq!(sim.initialize(&mut page), Lifecycle::Ready);
        (sim, page)
    }

    fn fill(sim: &mut AlertSimulator<SequenceReadingSource>, page: &mut Page, values: [&str; 3]) {
        for (field, value) in ThresholdField::ALL.into_iter().zip(values) {
            sim.input(page, field, value).unwrap();
        }
    }

    #[test]
    fn test_initialize_records_strategy() {
        let (sim, _) = ready(SensorReading::new(0.0, 0.0, 0.0));
        let b = sim.bindings().unwrap();
        assert_eq!(b.trigger_strategy, "config-button");
        assert!(!b.list_created);
    }

    #[test]
    fn test_initialize_twice_keeps_state() {
        let (mut sim, mut page) = ready(SensorReading::new(0.0, 0.0, 0.0));
        let before = sim.bindings().cloned();
        assert_eq!(sim.initialize(&mut page), Lifecycle::Ready);
        assert_eq!(sim.bindings().cloned(), before);
    }

    #[test]
    fn test_trigger_disabled_until_all_inputs_filled() {
        let (mut sim, mut page) = ready(SensorReading::new(0.0, 0.0, 0.0));
        let trigger = sim.bindings().unwrap().trigger;
        assert!(page.document().is_disabled(trigger).unwrap());
        assert!(page.document().has_class(trigger, "btn-disabled").unwrap());

        sim.input(&mut page, ThresholdField::TempMax, "30").unwrap();
        sim.input(&mut page, ThresholdField::HumidityMin, "40").unwrap();
        assert!(page.document().is_disabled(trigger).unwrap());

        sim.input(&mut page, ThresholdField::PhMin, "6.5").unwrap();
        assert!(!page.document().is_disabled(trigger).unwrap());
        assert!(!page.document().has_class(trigger, "btn-disabled").unwrap());

        sim.input(&mut page, ThresholdField::TempMax, "").unwrap();
        assert!(page.document().is_disabled(trigger).unwrap());
    }

    #[test]
    fn test_click_on_disabled_trigger_does_nothing() {
        let (mut sim, mut page) = ready(SensorReading::new(35.0, 50.0, 7.0));
        assert_eq!(sim.click(&mut page).unwrap(), None);
        let list = sim.bindings().unwrap().list;
        assert!(page.document().children(list).unwrap().is_empty());
    }

    #[test]
    fn test_click_renders_warning() {
        let (mut sim, mut page) = ready(SensorReading::new(35.0, 50.0, 7.0));
        fill(&mut sim, &mut page, ["30", "40", "6.5"]);
        let outcome = sim.click(&mut page).unwrap().unwrap();
        assert_eq!(outcome.entries().len(), 1);
        assert_eq!(outcome.entries()[0].severity, Severity::Warning);

        let list = sim.bindings().unwrap().list;
        let children = page.document().children(list).unwrap().to_vec();
        assert_eq!(children.len(), 1);
        assert!(page.document().has_class(children[0], "warning").unwrap());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let (mut sim, mut page) = ready(SensorReading::new(35.0, 50.0, 7.0));
        fill(&mut sim, &mut page, ["abc", "40", "6.5"]);
        let outcome = sim.click(&mut page).unwrap().unwrap();
        assert!(outcome.is_rejected());
        assert!(outcome.entries().is_empty());
        assert_eq!(page.dialogs().len(), 1);
        assert_eq!(sim.state(), Lifecycle::Ready);
        assert_eq!(sim.source_mut().generated(), 0);
    }

    #[test]
    fn test_click_fault_logged_and_swallowed() {
        let (mut sim, mut page) = ready(SensorReading::new(35.0, 50.0, 7.0));
        fill(&mut sim, &mut page, ["30", "40", "6.5"]);

        // 列表指向文档之外的节点, 渲染时报 UnknownNode
        let mut foreign = Document::new();
        let stray = (0..50).map(|_| foreign.create_element("div")).last().unwrap();
        sim.bindings.as_mut().unwrap().list = stray;

        let trigger = sim.bindings().unwrap().trigger;
        assert_eq!(sim.handle_event(&mut page, DomEvent::Click(trigger)), None);
        assert_eq!(sim.state(), Lifecycle::Ready);
        assert_eq!(sim.source_mut().generated(), 1);

        // 之后的事件照常处理
        sim.input(&mut page, ThresholdField::TempMax, "").unwrap();
        assert!(page.document().is_disabled(trigger).unwrap());
    }

    #[test]
    fn test_events_ignored_when_not_ready() {
        let mut page = Page::new(Document::new());
        let mut sim = AlertSimulator::new(
            SimulatorConfig::default(),
            SequenceReadingSource::constant(SensorReading::new(0.0, 0.0, 0.0)),
        );
        let button = page.document_mut().create_element("button");
        assert_eq!(sim.handle_event(&mut page, DomEvent::Click(button)), None);
        assert!(matches!(
            sim.click(&mut page),
            Err(SimulatorError::NotReady(Lifecycle::Uninitialized))
        ));
    }
}
