use registrar::error::CliError;
use registrar::logger::{LOG_FILE_NAME, initialize};

use log::LevelFilter;

// ============================================================================
// The global logger can only be set once per process, so this binary holds a
// single logger test
// ============================================================================

/// **VALUE**: Verifies that an unwritable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` unwraps instead of
/// returning a Result.
#[test]
fn given_invalid_log_dir_when_initialize_called_then_returns_logger_error() {
    // GIVEN: A path under a regular file, which cannot be a directory
    let file = tempfile::NamedTempFile::new().unwrap();
    let invalid_dir = file.path().join("logs");

    // WHEN
    let result = initialize(LevelFilter::Info, Some(&invalid_dir));

    // THEN
    match result {
        Err(CliError::Logger { message, .. }) => assert!(message.contains(LOG_FILE_NAME)),
        other => panic!("expected logger error, got {other:?}"),
    }
}
