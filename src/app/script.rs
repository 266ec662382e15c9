//! Plain-text event scripts for driving the engine headless.
//!
//! One command per line, `//` starts a comment:
//!
//! ```text
//! tool pen
//! color #FF0000
//! down 2 3
//! move 2 4
//! up
//! resize 16
//! export out.png
//! ```

use crate::app::commands::AppCommand;
use crate::app::error::{AppError, Result};
use crate::core::color::Color;
use crate::core::store::CanvasSize;
use crate::tools::ToolType;
use rust_i18n::t;
use std::path::PathBuf;

pub fn parse_script(source: &str) -> Result<Vec<(usize, AppCommand)>> {
    let mut commands = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.split("//").next().unwrap_or_default().trim();
        if line.is_empty() { continue; }
        let cmd = parse_line(line).map_err(|msg| AppError::Script { line: line_no, msg })?;
        commands.push((line_no, cmd));
    }
    Ok(commands)
}

pub fn parse_line(line: &str) -> std::result::Result<AppCommand, String> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();
    let arg = |i: usize| args.get(i).copied().ok_or_else(|| t!("error.missing_argument", cmd = cmd).to_string());

    let command = match cmd.as_str() {
        "tool" => {
            let name = arg(0)?;
            AppCommand::SetTool(ToolType::from_name(name).ok_or_else(|| t!("error.unknown_tool", tool = name).to_string())?)
        }
        "color" => AppCommand::SetColor(Color::from_hex(arg(0)?).map_err(|e| e.to_string())?),
        "down" => AppCommand::PointerDown(number(arg(0)?)?, number(arg(1)?)?),
        "move" => AppCommand::PointerMove(number(arg(0)?)?, number(arg(1)?)?),
        "up" => AppCommand::PointerUp,
        "leave" => AppCommand::PointerLeave,
        "undo" => AppCommand::Undo,
        "clear" => AppCommand::Clear,
        "resize" => {
            let side = number(arg(0)?)?;
            let size = u32::try_from(side)
                .map_err(|_| t!("error.unsupported_size", size = side).to_string())
                .and_then(|s| CanvasSize::try_from(s).map_err(|e| e.to_string()))?;
            AppCommand::Resize(size)
        }
        "export" => AppCommand::Export(args.first().map(|p| PathBuf::from(*p))),
        other => return Err(t!("error.unknown_command", cmd = other).to_string()),
    };
    Ok(command)
}

fn number(value: &str) -> std::result::Result<i32, String> {
    value.parse().map_err(|_| t!("error.invalid_number", value = value).to_string())
}
