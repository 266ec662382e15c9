use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    OutOfBounds { x: i32, y: i32 },
    IndexOutOfRange(usize),
    InvalidColor(String),
    UnsupportedSize(u32),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::OutOfBounds { x, y } => write!(f, "{}", t!("error.out_of_bounds", x = x, y = y)),
            CoreError::IndexOutOfRange(index) => write!(f, "{}", t!("error.index_out_of_range", index = index)),
            CoreError::InvalidColor(value) => write!(f, "{}", t!("error.invalid_color", value = value)),
            CoreError::UnsupportedSize(size) => write!(f, "{}", t!("error.unsupported_size", size = size)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
