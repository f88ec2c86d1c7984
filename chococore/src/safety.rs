//! Panic isolation for per-frame rendering.
//!
//! A bug in one frame's UI code should not take the whole window down.

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(panic = %msg, "caught panic in frame, recovered");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_or_passes_value_through() {
        assert_eq!(catch_or(0, || 42), 42);
    }

    #[test]
    fn test_catch_or_returns_fallback_on_panic() {
        let result = catch_or(-1, || -> i32 { panic!("boom") });
        assert_eq!(result, -1);
    }

    #[test]
    fn test_catch_or_with_string_payload() {
        let result = catch_or(String::from("fallback"), || -> String {
            panic!("{}", String::from("formatted"))
        });
        assert_eq!(result, "fallback");
    }
}
