//! Entry/exit tracing around public operations.

use std::time::Instant;

/// Run `f` inside an info span named after the operation, logging entry,
/// exit and elapsed time.
pub fn timed<T>(operation: &str, f: impl FnOnce() -> T) -> T {
    let span = tracing::info_span!("operation", name = operation);
    let _guard = span.enter();

    tracing::info!("Entering {}", operation);
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis();
    tracing::info!("Exiting {} - executed in {} ms", operation, elapsed);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        assert_eq!(timed("answer", || 42), 42);
    }
}
