use pxa_canvas::app::command_handler::CommandHandler;
use pxa_canvas::app::config::EngineConfig;
use pxa_canvas::app::engine::AutoConfirm;
use pxa_canvas::app::state::AppState;
use pxa_canvas::core::color::Color;
use pxa_canvas::core::store::CanvasSize;
use pxa_canvas::render::compositor::MAX_EXPORT_SCALE;
use clap::Parser;
use std::path::PathBuf;

/// Replays a pointer/tool script against a fresh canvas and exports the result as PNG.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Script file, one command per line (`tool pen`, `down 2 3`, `up`, `export`, ...)
    script: PathBuf,

    /// Canvas side length: 16, 32, 48 or 64
    #[arg(long, default_value_t = 32)]
    size: u32,

    /// Undo history depth
    #[arg(long, default_value_t = 20)]
    history: usize,

    /// Export scale factor
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=MAX_EXPORT_SCALE as i64))]
    scale: u32,

    /// Initial drawing color
    #[arg(long, default_value = "#000000")]
    color: String,

    /// Accept resizes that discard painted cells
    #[arg(short, long)]
    yes: bool,

    /// Directory for timestamped exports
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also write the final canvas to this path
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Message language (en, zh-CN)
    #[arg(long, default_value = "en")]
    locale: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    rust_i18n::set_locale(&args.locale);

    let config = EngineConfig {
        size: CanvasSize::try_from(args.size)?,
        history_limit: args.history,
        export_scale: args.scale,
        primary_color: Color::from_hex(&args.color)?,
    };

    let mut app = AppState::new(config).with_confirmer(AutoConfirm(args.yes));
    app.export_dir = args.out_dir;

    let source = std::fs::read_to_string(&args.script)?;
    CommandHandler::run_script(&mut app, &source)?;

    if let Some(out) = args.out.as_deref() {
        app.export_png(Some(out))?;
    }

    for path in &app.exports {
        log::info!("wrote {}", path.display());
    }
    if app.exports.is_empty() {
        log::warn!("script finished without an export");
    }
    Ok(())
}
