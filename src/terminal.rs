// src/terminal.rs
//! Line-oriented front end: stdin drives the widget, every change redraws it.

use colored::Colorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::{
    services::ChatService,
    widget::{ChatInput, ChatWidget, EMPTY_STATE, TYPING_INDICATOR},
};

const HELP: &str = "commands: /open /min /toggle /reset /help /quit (end a line with \\ to continue it)";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Open,
    Minimize,
    Toggle,
    Reset,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "/open" => Some(Self::Open),
            "/min" | "/minimize" => Some(Self::Minimize),
            "/toggle" => Some(Self::Toggle),
            "/reset" => Some(Self::Reset),
            "/help" => Some(Self::Help),
            "/quit" | "/exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run until `/quit` or end of input.
pub async fn run<S, R, W>(widget: &mut ChatWidget<S>, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    S: ChatService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut raw = Vec::new();
    let mut input = ChatInput::new();

    draw(widget, &mut writer).await?;

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw).await? == 0 {
            break;
        }
        let line = match std::str::from_utf8(&raw) {
            Ok(line) => line.trim_end_matches(['\n', '\r']).to_string(),
            Err(err) => {
                warn!(error = %err, "skipping input line that is not valid UTF-8");
                continue;
            }
        };

        if input.value().is_empty()
            && let Some(command) = Command::parse(&line)
        {
            match command {
                Command::Open => widget.open(),
                Command::Minimize => widget.minimize(),
                Command::Toggle => widget.toggle(),
                Command::Reset => widget.reset(),
                Command::Help => {
                    writer.write_all(format!("{}\n", HELP.dimmed()).as_bytes()).await?;
                    writer.flush().await?;
                    continue;
                }
                Command::Quit => break,
            }
            draw(widget, &mut writer).await?;
            continue;
        }

        if let Some(head) = line.strip_suffix('\\') {
            input.push_str(head);
            input.newline();
            continue;
        }
        input.push_str(&line);

        let Some(text) = input.submit() else {
            input.set_value("");
            continue;
        };

        // typing into a minimized widget opens it
        widget.open();
        if let Some(text) = widget.begin_submit(&text) {
            draw(widget, &mut writer).await?;
            widget.finish_submit(&text).await;
            draw(widget, &mut writer).await?;
        }
    }

    Ok(())
}

async fn draw<S, W>(widget: &ChatWidget<S>, writer: &mut W) -> std::io::Result<()>
where
    S: ChatService,
    W: AsyncWrite + Unpin,
{
    let mut frame = String::new();
    for line in widget.render() {
        frame.push_str(&paint(&line));
        frame.push('\n');
    }
    writer.write_all(frame.as_bytes()).await?;
    writer.flush().await
}

fn paint(line: &str) -> String {
    if line.starts_with("== ") {
        return line.bold().to_string();
    }
    if line == EMPTY_STATE || line == TYPING_INDICATOR {
        return line.italic().dimmed().to_string();
    }
    if let Some((time, rest)) = line.split_once("] ") {
        if let Some(text) = rest.strip_prefix("You: ") {
            return format!("{}] {} {}", time.dimmed(), "You:".cyan().bold(), text);
        }
        if let Some(text) = rest.strip_prefix("Bot: ") {
            return format!("{}] {} {}", time.dimmed(), "Bot:".green().bold(), text);
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("/open"), Some(Command::Open));
        assert_eq!(Command::parse(" /min "), Some(Command::Minimize));
        assert_eq!(Command::parse("/exit"), Some(Command::Quit));
        assert_eq!(Command::parse("hello"), None);
        assert_eq!(Command::parse("/unknown"), None);
    }
}
