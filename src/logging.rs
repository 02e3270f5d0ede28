// ============================================================================
// Logging
// Subscriber setup for binaries that want to see decimal diagnostics
// ============================================================================

use tracing::Level;

/// Install a global fmt subscriber filtered at `level`.
///
/// Library code only emits events (`debug` for rejected input and
/// underflow, `trace` for assign rebinds); installing a subscriber is left
/// to the binary.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_fails_when_subscriber_installed() {
        // Captured writer keeps later tests in this binary quiet
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_test_writer()
            .try_init();

        assert!(init(Level::DEBUG).is_err());
    }
}
