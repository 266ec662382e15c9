use crate::app::state::AppState;
use crate::app::commands::AppCommand;
use crate::app::error::{AppError, Result};
use crate::app::script::parse_script;
use rust_i18n::t;

pub struct CommandHandler;

impl CommandHandler {
    pub fn execute(app: &mut AppState, cmd: AppCommand) -> Result<()> {
        match cmd {
            AppCommand::SetTool(tool) => app.set_tool(tool),
            AppCommand::SetColor(color) => app.engine.set_primary_color(color),
            AppCommand::PointerDown(x, y) => app.on_mouse_down(x, y)?,
            AppCommand::PointerMove(x, y) => app.on_mouse_move(x, y)?,
            AppCommand::PointerUp => app.on_mouse_up()?,
            AppCommand::PointerLeave => app.on_mouse_leave()?,
            AppCommand::Undo => app.undo(),
            AppCommand::Clear => app.clear(),
            AppCommand::Resize(size) => {
                if !app.resize(size.side())? {
                    log::warn!("{}", t!("warning.resize_declined", size = size.side()));
                }
            }
            AppCommand::Export(path) => {
                let written = app.export_png(path.as_deref())?;
                log::info!("{}", t!("info.exported", path = written.display().to_string()));
            }
        }
        Ok(())
    }

    /// Parses the whole script first, then runs it; failures carry the line number.
    pub fn run_script(app: &mut AppState, source: &str) -> Result<()> {
        for (line, cmd) in parse_script(source)? {
            Self::execute(app, cmd).map_err(|e| match e {
                AppError::Core(err) => AppError::Script { line, msg: err.to_string() },
                other => other,
            })?;
        }
        Ok(())
    }
}
