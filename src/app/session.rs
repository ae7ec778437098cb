use crate::app::render::render;
use crate::core::controller::RequestController;
use crate::core::MultiplyApi;
use crate::domain::model::{Key, Operand};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "Commands: <a> <b> | first <text> | second <text> | <empty line> = Enter | reset | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Fill both fields, then press Enter.
    Calculate(String, String),
    Edit(Operand, String),
    Confirm,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SessionCommand::Confirm;
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head {
        "reset" if rest.is_empty() => SessionCommand::Reset,
        "quit" | "exit" if rest.is_empty() => SessionCommand::Quit,
        "help" if rest.is_empty() => SessionCommand::Help,
        "first" => SessionCommand::Edit(Operand::First, rest.to_string()),
        "second" => SessionCommand::Edit(Operand::Second, rest.to_string()),
        _ => {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            match parts.as_slice() {
                [a, b] => SessionCommand::Calculate(a.to_string(), b.to_string()),
                _ => SessionCommand::Unknown(trimmed.to_string()),
            }
        }
    }
}

/// Line-oriented front end for one controller. Returns when input ends or on `quit`.
pub async fn run_session<A, R, W>(
    controller: &RequestController<A>,
    input: R,
    output: &mut W,
) -> Result<()>
where
    A: MultiplyApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(format!("{}\n", HELP).as_bytes()).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            SessionCommand::Calculate(first, second) => {
                controller.set_operand(Operand::First, first);
                controller.set_operand(Operand::Second, second);
                // Failures are already reflected in the rendered outcome.
                let _ = controller.handle_key_press(Key::Enter).await;
            }
            SessionCommand::Edit(operand, text) => {
                controller.set_operand(operand, text);
            }
            SessionCommand::Confirm => {
                let _ = controller.handle_key_press(Key::Enter).await;
            }
            SessionCommand::Reset => controller.reset(),
            SessionCommand::Help => {
                output.write_all(format!("{}\n", HELP).as_bytes()).await?;
                continue;
            }
            SessionCommand::Quit => break,
            SessionCommand::Unknown(text) => {
                tracing::debug!("Unrecognised input: {}", text);
                output
                    .write_all(format!("Unrecognised input: {}\n{}\n", text, HELP).as_bytes())
                    .await?;
                output.flush().await?;
                continue;
            }
        }

        output
            .write_all(format!("{}\n\n", render(&controller.snapshot())).as_bytes())
            .await?;
        output.flush().await?;
    }

    Ok(())
}
