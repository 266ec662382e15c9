pub mod manager;
pub mod patch;
