//! Pure formatting functions for console output.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Print the usage line for the command.
pub fn display_usage(program: &str) {
    eprintln!("Usage: {} <version> <patch|minor|major>", program);
}
