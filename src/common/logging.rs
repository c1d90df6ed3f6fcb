//! Colored status-line logging.

use colored::Colorize;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Prints a tagged status line. Errors go to stderr, everything else to stdout.
pub fn log(level: LogLevel, message: &str) {
    match level {
        LogLevel::Info => println!("{} {message}", "[INFO]".cyan()),
        LogLevel::Success => println!("{} {message}", "[OK]".green()),
        LogLevel::Warning => println!("{} {message}", "[WARN]".yellow()),
        LogLevel::Error => eprintln!("{} {message}", "[ERROR]".red()),
    }
}
