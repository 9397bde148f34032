//! Generation Timeouts
//!
//! Bounds a single generation call. An elapsed timeout is reported as an
//! ordinary [`GenerationError`] so callers handle it like any other failure.
//!
//! ```ignore
//! use crate::ai::timeout::with_timeout;
//!
//! let response = with_timeout(
//!     Duration::from_secs(60),
//!     provider.generate(&prompt),
//!     "generation request",
//! )
//! .await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::types::{GenerationError, GenerationResult};

/// Execute an async generation call with a timeout
pub async fn with_timeout<T, F>(
    timeout: Duration,
    future: F,
    operation_name: &str,
) -> GenerationResult<T>
where
    F: Future<Output = GenerationResult<T>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(GenerationError::timeout(operation_name, timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorCategory;

    #[tokio::test]
    async fn test_with_timeout_success() {
        let result = with_timeout(
            Duration::from_secs(1),
            async { Ok::<_, GenerationError>(42) },
            "test operation",
        )
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_with_timeout_passes_inner_error_through() {
        let result = with_timeout(
            Duration::from_secs(1),
            async { Err::<u32, _>(GenerationError::new(ErrorCategory::Auth, "bad key")) },
            "test operation",
        )
        .await;
        assert_eq!(result.unwrap_err().category, ErrorCategory::Auth);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let result = with_timeout(
            Duration::from_millis(10),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, GenerationError>(42)
            },
            "slow operation",
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.category, ErrorCategory::Timeout);
        assert!(err.message.contains("slow operation"));
    }
}
