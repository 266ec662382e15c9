use std::io;
use crate::core::error::CoreError;
use rust_i18n::t;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Image(image::ImageError),
    Core(CoreError),
    Script { line: usize, msg: String },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "{}", t!("error.io_error", err = err.to_string())),
            AppError::Image(err) => write!(f, "{}", t!("error.image_error", err = err.to_string())),
            AppError::Core(err) => write!(f, "{}", t!("error.core_error", err = err.to_string())),
            AppError::Script { line, msg } => write!(f, "{}", t!("error.script_error", line = line, msg = msg)),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Image(err) => Some(err),
            AppError::Core(err) => Some(err),
            AppError::Script { .. } => None,
        }
    }
}

impl From<io::Error> for AppError { fn from(err: io::Error) -> Self { AppError::Io(err) } }
impl From<image::ImageError> for AppError { fn from(err: image::ImageError) -> Self { AppError::Image(err) } }
impl From<CoreError> for AppError { fn from(err: CoreError) -> Self { AppError::Core(err) } }

pub type Result<T> = std::result::Result<T, AppError>;
