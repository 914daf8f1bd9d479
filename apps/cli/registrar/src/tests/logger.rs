// Unit tests for logger module initialization logic

use crate::logger::{initialize, level_for};

use log::LevelFilter;

/// **VALUE**: Verifies -v counts map onto increasing levels and saturate.
#[test]
fn given_verbosity_counts_when_mapping_then_levels_increase() {
    assert_eq!(level_for(0), LevelFilter::Warn);
    assert_eq!(level_for(1), LevelFilter::Info);
    assert_eq!(level_for(2), LevelFilter::Debug);
    assert_eq!(level_for(3), LevelFilter::Trace);
    assert_eq!(level_for(9), LevelFilter::Trace);
}

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // WHEN: Calling initialize twice, stderr only
    let result1 = initialize(LevelFilter::Debug, None);
    let result2 = initialize(LevelFilter::Debug, None);

    // THEN: Both return Ok
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}
