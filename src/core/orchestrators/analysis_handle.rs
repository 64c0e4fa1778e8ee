use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::core::models::GateError;

/// A spawned analysis whose result is awaited like a future.
///
/// Dropping the handle aborts the task. Blocking work that has already
/// started runs to completion, but its result is discarded.
pub struct AnalysisHandle<T> {
    join_handle: JoinHandle<Result<T, GateError>>,
}

impl<T> AnalysisHandle<T> {
    pub(crate) fn from_join_handle(join_handle: JoinHandle<Result<T, GateError>>) -> Self {
        Self { join_handle }
    }

    pub fn is_pending(&self) -> bool {
        !self.join_handle.is_finished()
    }

    pub fn cancel(&self) {
        self.join_handle.abort();
    }
}

impl<T> Future for AnalysisHandle<T> {
    type Output = Result<T, GateError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().join_handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_error)) if join_error.is_cancelled() => {
                Poll::Ready(Err(GateError::Superseded))
            }
            Poll::Ready(Err(join_error)) => Poll::Ready(Err(GateError::Decode(format!(
                "analysis task failed: {}",
                join_error
            )))),
        }
    }
}

impl<T> Drop for AnalysisHandle<T> {
    fn drop(&mut self) {
        self.join_handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_resolves_to_task_result() {
        let handle = AnalysisHandle::from_join_handle(tokio::spawn(async { Ok(7u32) }));

        assert_eq!(handle.await, Ok(7));
    }

    #[tokio::test]
    async fn test_cancelled_handle_resolves_to_superseded() {
        let handle: AnalysisHandle<u32> = AnalysisHandle::from_join_handle(tokio::spawn(async {
            std::future::pending::<()>().await;
            Ok(1)
        }));

        assert!(handle.is_pending());
        handle.cancel();

        assert_eq!(handle.await, Err(GateError::Superseded));
    }

    #[tokio::test]
    async fn test_panicking_task_surfaces_as_error_not_panic() {
        let handle: AnalysisHandle<u32> =
            AnalysisHandle::from_join_handle(tokio::task::spawn_blocking(|| panic!("boom")));

        assert!(matches!(handle.await, Err(GateError::Decode(_))));
    }
}
