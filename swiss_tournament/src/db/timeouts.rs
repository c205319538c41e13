//! Per-query deadlines for repository calls.
//!
//! A query that outlives its deadline surfaces as [`TimeoutError::Timeout`]
//! instead of holding a pooled connection indefinitely.

use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;

/// Deadline used when none is configured
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum TimeoutError {
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type TimeoutResult<T> = Result<T, TimeoutError>;

/// Await a sqlx future, giving up after `deadline`
pub async fn with_timeout<F, T>(deadline: Duration, query: F) -> TimeoutResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    timeout(deadline, query)
        .await
        .map_err(|_| TimeoutError::Timeout(deadline))?
        .map_err(TimeoutError::Database)
}

/// [`with_timeout`] using [`DEFAULT_QUERY_TIMEOUT`]
pub async fn with_default_timeout<F, T>(query: F) -> TimeoutResult<T>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    with_timeout(DEFAULT_QUERY_TIMEOUT, query).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_timeout() {
        let result = with_default_timeout(async { Ok::<_, sqlx::Error>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_database_error_passes_through() {
        let result: TimeoutResult<()> =
            with_default_timeout(async { Err(sqlx::Error::RowNotFound) }).await;
        assert!(matches!(
            result,
            Err(TimeoutError::Database(sqlx::Error::RowNotFound))
        ));
    }

    #[tokio::test]
    async fn test_slow_query_times_out() {
        let deadline = Duration::from_millis(10);
        let result = with_timeout(deadline, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, sqlx::Error>(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, TimeoutError::Timeout(d) if d == deadline));
        assert!(err.to_string().contains("timed out"));
    }
}
