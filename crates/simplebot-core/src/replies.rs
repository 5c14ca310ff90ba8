//! Canned replies — the authored trigger table, default reply, and demo inputs.

use chrono::{DateTime, Local};

/// Placeholder replaced with the bot's name inside reply templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Name used when nothing else is configured.
pub const DEFAULT_BOT_NAME: &str = "小助手";

/// Returned whenever the normalized message matches no trigger.
pub const DEFAULT_REPLY: &str = "抱歉，我还不太明白你的意思。";

/// Trigger whose reply is the construction-time clock.
pub const TIME_TRIGGER: &str = "时间";

/// Static trigger → reply templates. Keys are stored as authored (already lower-case).
pub const REPLY_TEMPLATES: &[(&str, &str)] = &[
    ("你好", "你好！我是{name}，很高兴认识你！"),
    ("你是谁", "我是{name}，一个简单的聊天机器人。"),
    ("再见", "再见！希望很快能再次和你聊天！"),
    ("天气", "抱歉，我还不能查询天气信息。"),
];

/// Messages fed to the responder by the demonstration run, in order.
pub const DEMO_MESSAGES: &[&str] = &["你好", "你是谁", "天气", "时间", "再见"];

/// Substitute the bot name into a reply template.
pub fn render_template(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}

/// Render a timestamp the way the zh-CN locale prints a date-time:
/// `2024/5/3 14:05:09` (no zero padding on month/day, 24-hour clock).
pub fn format_locale_time(now: &DateTime<Local>) -> String {
    now.format("%Y/%-m/%-d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_template_substitutes_name() {
        assert_eq!(
            render_template("我是{name}，一个简单的聊天机器人。", "小助手"),
            "我是小助手，一个简单的聊天机器人。"
        );
    }

    #[test]
    fn test_render_template_without_placeholder() {
        assert_eq!(render_template("再见！", "小助手"), "再见！");
    }

    #[test]
    fn test_format_locale_time_unpadded() {
        let t = Local.with_ymd_and_hms(2024, 5, 3, 14, 5, 9).unwrap();
        assert_eq!(format_locale_time(&t), "2024/5/3 14:05:09");
    }

    #[test]
    fn test_demo_messages_all_have_replies() {
        for msg in DEMO_MESSAGES {
            let known = *msg == TIME_TRIGGER || REPLY_TEMPLATES.iter().any(|(k, _)| k == msg);
            assert!(known, "demo message {msg} has no reply");
        }
    }
}
