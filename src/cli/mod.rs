//! CLI module for phonedir
//!
//! Provides command-line interface for:
//! - demo: Load sample contacts and run the sample queries
//! - serve: Answer JSON requests from stdin, one per line

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod request;

pub use args::{Cli, Command};
pub use commands::{demo, load_sample_contacts, run, run_command, sample_contact, serve, serve_requests};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
pub use request::Request;
