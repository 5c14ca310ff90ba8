//! Transcript types — a recorded run of messages and replies.

use serde::{Deserialize, Serialize};

use crate::responder::Responder;

/// Header printed above a rendered transcript.
pub const TRANSCRIPT_HEADER: &str = "测试机器人对话：";

/// One user message and the bot's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub bot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub bot_name: String,
    pub exchanges: Vec<Exchange>,
}

impl Transcript {
    /// Feed `messages` to the responder in order and record each reply.
    pub fn run<S: AsRef<str>>(responder: &Responder, messages: &[S]) -> Self {
        let exchanges = messages
            .iter()
            .map(|msg| Exchange {
                user: msg.as_ref().to_string(),
                bot: responder.respond(msg.as_ref()),
            })
            .collect();

        Self {
            bot_name: responder.name().to_string(),
            exchanges,
        }
    }

    /// Plain-text form: header, then `用户:`/`机器人:` pairs separated by blank lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(TRANSCRIPT_HEADER);
        out.push('\n');
        for ex in &self.exchanges {
            out.push_str(&format!("用户: {}\n", ex.user));
            out.push_str(&format!("机器人: {}\n\n", ex.bot));
        }
        out
    }

    /// `{"bot_name": "...", "exchanges": [{"user": "...", "bot": "..."}]}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
