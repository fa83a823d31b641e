//! ConText - a single-user contact manager driven by typed commands.
//!
//! Each line of input is a command such as `add n/NAME p/PHONE ...`,
//! `delete 1 3` or `find alice`. Contacts live in memory and are saved to a
//! JSON file after every change.
//!
//! # Architecture
//!
//! - **domain**: Validated field value types
//! - **models**: Contacts, the duplicate-rejecting collection and display filters
//! - **parser**: Tokenizer and per-command parsers
//! - **commands**: Executable commands
//! - **services**: Model facade, command execution and startup loading
//! - **storage**: JSON persistence
//! - **ui** / **app**: Terminal view and the input loop
//! - **error** / **messages**: Error types and user-facing text
//! - **config**: Configuration from environment variables

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod messages;
pub mod models;
pub mod parser;
pub mod services;
pub mod storage;
pub mod ui;

pub use commands::{Command, CommandResult};
pub use config::{Config, OnLoadError};
pub use error::{CommandError, ConfigError, ContactsError, LogicError, ParseError, StorageError};
pub use models::{Contact, Contacts};
pub use parser::parse_command;
