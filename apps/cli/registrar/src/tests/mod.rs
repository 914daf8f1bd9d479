mod cli;
mod commands;
mod config;
mod error;
mod logger;
