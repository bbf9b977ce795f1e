//! Macros for common CLI error handling patterns.

/// Write to a stream and exit with error code if writing fails.
///
/// This macro handles the common pattern of attempting to write to stderr/stdout
/// and returning an error exit code if the write operation fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr) => {
        if writeln!($dest).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
