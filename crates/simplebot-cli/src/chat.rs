//! Interactive chat loop over any line-oriented reader/writer.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use simplebot_core::{normalize, Responder};

/// Typing this line ends the session.
pub const EXIT_COMMAND: &str = "退出";

/// Lists the known triggers, unless the table defines its own reply for it.
pub const HELP_COMMAND: &str = "帮助";

pub const PROMPT: &str = "你说: ";

pub const FAREWELL: &str = "再见！期待下次见面！";

fn help_text(responder: &Responder) -> String {
    format!(
        "你可以对我说: {}（输入 \"{EXIT_COMMAND}\" 结束对话）",
        responder.triggers().join("、")
    )
}

/// Run the loop until `退出` or EOF. Returns how many messages were answered.
pub fn run_chat<R: BufRead, W: Write>(
    responder: &Responder,
    mut input: R,
    output: &mut W,
) -> Result<usize> {
    writeln!(output, "=== {} 已启动 ===", responder.name())?;
    writeln!(output, "输入 \"{HELP_COMMAND}\" 查看我能回答什么，输入 \"{EXIT_COMMAND}\" 结束对话")?;

    let mut answered = 0;
    let mut buf = Vec::new();
    loop {
        write!(output, "\n{PROMPT}")?;
        output.flush()?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        // A bad line is answered like any other unknown message.
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line was not valid UTF-8, replaced invalid bytes");
        }

        let message = normalize(&line);
        if message.is_empty() {
            continue;
        }
        if message == EXIT_COMMAND {
            break;
        }

        let reply = if message == HELP_COMMAND && !responder.has_trigger(&message) {
            help_text(responder)
        } else {
            responder.respond(&message)
        };
        writeln!(output, "机器人: {reply}")?;
        answered += 1;
    }

    writeln!(output, "机器人: {FAREWELL}")?;
    info!("Chat ended after {} message(s)", answered);
    Ok(answered)
}
