//! CLI module for the lunar string library
//!
//! This module provides a command-line front end for calling library functions directly.
//!
//! ## Commands
//!
//! - `call <FUNCTION> [ARGS]...` - Call a `string` function and print its results
//! - `list` - List the registered functions with their signatures
//!
//! ## Modules
//!
//! - `commands` - Command implementations and result rendering
//! - `literal` - Parsing of command-line arguments into values
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod literal;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::LUNAR_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Call Lua-style string functions from the command line
#[derive(Parser, Debug)]
#[command(name = "lunar")]
#[command(version = LUNAR_VERSION)]
#[command(about = "Call Lua-style string functions from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Call a string function and print its results
    Call {
        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
        /// Call as a method: the first argument is the receiver (`s:f(...)`)
        #[arg(long)]
        method: bool,
        /// Character `byte` reports for units that do not fit in a byte
        #[arg(long, value_name = "CHAR")]
        placeholder: Option<char>,
        /// Disable method calls on strings
        #[arg(long = "no-methods")]
        no_methods: bool,
        /// Function name (e.g. `sub`)
        #[arg(value_name = "FUNCTION")]
        function: String,
        /// Arguments: `nil`, `true`/`false`, a number, or a string (quote to force a string)
        #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the registered string functions
    List,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Call {
            json,
            method,
            placeholder,
            no_methods,
            function,
            args,
        } => {
            let options = commands::CallOptions {
                json,
                method,
                placeholder,
                string_methods: !no_methods,
            };
            let output = commands::call_function(&function, &args, &options)?;
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            println!("{}", commands::list_functions());
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
