// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持西班牙语（默认）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 说明: 所有翻译显式传入 locale, 不依赖全局 locale 状态
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "es";

/// 支持的语言列表
pub const SUPPORTED_LOCALES: &[&str] = &["es", "en"];

/// 是否为支持的语言
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use sensor_alert_sim::i18n::t;
/// let msg = t("es", "alert.just_now");
/// ```
pub fn t(locale: &str, key: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use sensor_alert_sim::i18n::t_with_args;
/// let msg = t_with_args("es", "alert.ph_critical.message", &[("current", "5.2"), ("limit", "6.5")]);
/// ```
pub fn t_with_args(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(locale, key);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
