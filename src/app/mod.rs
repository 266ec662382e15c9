pub mod command_handler;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod input_handler;
pub mod io_service;
pub mod script;
pub mod state;
pub mod tool_manager;
