//! The responder — normalize a message and look it up in a fixed reply table.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::replies::{
    format_locale_time, render_template, DEFAULT_REPLY, REPLY_TEMPLATES, TIME_TRIGGER,
};

/// Trim surrounding whitespace (including a byte-order mark) and lower-case.
/// Lookups only ever see this form.
pub fn normalize(message: &str) -> String {
    message
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// A named bot holding an immutable trigger → reply table.
#[derive(Debug, Clone)]
pub struct Responder {
    name: String,
    table: HashMap<String, String>,
}

impl Responder {
    /// Build the standard table. The time reply is frozen at this moment.
    pub fn new(name: &str) -> Self {
        Self::with_clock(name, Local::now())
    }

    /// Build the standard table with the time reply taken from `now`.
    pub fn with_clock(name: &str, now: DateTime<Local>) -> Self {
        let mut table: HashMap<String, String> = REPLY_TEMPLATES
            .iter()
            .map(|(trigger, template)| (trigger.to_string(), render_template(template, name)))
            .collect();
        table.insert(TIME_TRIGGER.to_string(), format_locale_time(&now));

        Self {
            name: name.to_string(),
            table,
        }
    }

    /// Build a responder over an arbitrary table. Keys are normalized on insert.
    pub fn from_entries<I, K, V>(name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut responder = Self {
            name: name.to_string(),
            table: HashMap::new(),
        };
        responder.extend(entries);
        responder
    }

    /// Merge extra trigger/reply pairs. Replies may use `{name}`; later keys win.
    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (trigger, reply) in entries {
            let key = normalize(trigger.as_ref());
            if key.is_empty() {
                continue;
            }
            self.table
                .insert(key, render_template(reply.as_ref(), &self.name));
        }
    }

    /// Reply to a message: exact match on the normalized form, or the default reply.
    pub fn respond(&self, message: &str) -> String {
        let key = normalize(message);
        match self.table.get(&key) {
            Some(reply) => {
                debug!("trigger hit: {:?}", key);
                reply.clone()
            }
            None => {
                debug!("no trigger for {:?}, using default reply", key);
                DEFAULT_REPLY.to_string()
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Known triggers, sorted.
    pub fn triggers(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.table.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn has_trigger(&self, message: &str) -> bool {
        self.table.contains_key(&normalize(message))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_bot() -> Responder {
        let t = Local.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap();
        Responder::with_clock("小助手", t)
    }

    #[test]
    fn test_table_replies_with_name() {
        let bot = fixed_bot();
        assert_eq!(bot.respond("你好"), "你好！我是小助手，很高兴认识你！");
        assert_eq!(bot.respond("你是谁"), "我是小助手，一个简单的聊天机器人。");
        assert_eq!(bot.respond("再见"), "再见！希望很快能再次和你聊天！");
        assert_eq!(bot.respond("天气"), "抱歉，我还不能查询天气信息。");
        assert_eq!(bot.respond("时间"), "2024/1/2 09:30:00");
    }

    #[test]
    fn test_name_is_interpolated() {
        let bot = Responder::new("阿福");
        assert_eq!(bot.name(), "阿福");
        assert_eq!(bot.respond("你好"), "你好！我是阿福，很高兴认识你！");
        assert_eq!(bot.respond("你是谁"), "我是阿福，一个简单的聊天机器人。");
    }

    #[test]
    fn test_unknown_message_gets_default() {
        let bot = fixed_bot();
        assert_eq!(bot.respond("随便说点什么"), DEFAULT_REPLY);
        assert_eq!(bot.respond(""), DEFAULT_REPLY);
        assert_eq!(bot.respond("   "), DEFAULT_REPLY);
    }

    #[test]
    fn test_no_partial_matching() {
        let bot = fixed_bot();
        assert_eq!(bot.respond("你好啊"), DEFAULT_REPLY);
        assert_eq!(bot.respond("你"), DEFAULT_REPLY);
        assert_eq!(bot.respond("今天天气"), DEFAULT_REPLY);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let bot = fixed_bot();
        assert_eq!(bot.respond(" 你好 "), bot.respond("你好"));
        assert_eq!(bot.respond("\t再见\n"), bot.respond("再见"));
    }

    #[test]
    fn test_byte_order_mark_ignored() {
        let bot = fixed_bot();
        assert_eq!(bot.respond("\u{feff}你好"), bot.respond("你好"));
        assert_eq!(bot.respond(" 天气\u{feff} "), bot.respond("天气"));
        assert_eq!(normalize("\u{feff} HeLLo"), "hello");
    }

    #[test]
    fn test_ascii_trigger_is_case_insensitive() {
        let bot = Responder::from_entries("bot", [("hello", "hi, I'm {name}")]);
        assert_eq!(bot.respond(" HeLLo "), "hi, I'm bot");
        assert_eq!(bot.respond("hello"), "hi, I'm bot");
        assert_eq!(bot.respond("hello there"), DEFAULT_REPLY);
    }

    #[test]
    fn test_mixed_case_keys_are_normalized() {
        let bot = Responder::from_entries("bot", [("  PING ", "pong")]);
        assert_eq!(bot.triggers(), vec!["ping"]);
        assert_eq!(bot.respond("Ping"), "pong");
    }

    #[test]
    fn test_time_reply_is_frozen() {
        let bot = Responder::new("小助手");
        let first = bot.respond("时间");
        let second = bot.respond("时间");
        assert_eq!(first, second);
        assert_ne!(first, DEFAULT_REPLY);
    }

    #[test]
    fn test_extend_overrides_and_adds() {
        let mut bot = fixed_bot();
        bot.extend([("天气", "今天{name}也不知道天气。"), ("OK", "好的")]);
        assert_eq!(bot.respond("天气"), "今天小助手也不知道天气。");
        assert_eq!(bot.respond("ok"), "好的");
        assert_eq!(bot.len(), 6);
    }

    #[test]
    fn test_extend_skips_blank_triggers() {
        let mut bot = fixed_bot();
        bot.extend([("   ", "nothing")]);
        assert_eq!(bot.len(), 5);
        assert_eq!(bot.respond(""), DEFAULT_REPLY);
    }

    #[test]
    fn test_triggers_sorted() {
        let bot = Responder::from_entries("bot", [("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(bot.triggers(), vec!["a", "b", "c"]);
        assert!(!bot.is_empty());
        assert!(bot.has_trigger(" B "));
        assert!(!bot.has_trigger("d"));
    }
}
