//! Bounded pool for blocking work.
//!
//! Jobs run on tokio's blocking threads, gated by a semaphore so at most `size`
//! of them are in flight at once. The permit moves into the job, so a job whose
//! caller stopped waiting still counts against the bound until it returns.

use std::sync::Arc;

use tokio::sync::Semaphore;

use super::error::AttemptError;

/// Default number of concurrent blocking jobs
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone)]
pub struct WorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs a blocking job off the async event loop and waits for its result.
    ///
    /// # Errors
    /// - If the pool has been closed
    /// - If the job panics
    /// - Whatever error the job itself returns
    pub async fn run<F, T>(&self, job: F) -> Result<T, AttemptError>
    where
        F: FnOnce() -> Result<T, AttemptError> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|_| AttemptError::Worker("worker pool is closed".to_string()))?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        })
        .await
        .map_err(|e| AttemptError::Worker(e.to_string()))?
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_runs_job_and_returns_value() {
        let pool = WorkerPool::new(2);
        let value = pool.run(|| Ok::<_, AttemptError>(21 * 2)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_job_error_is_returned() {
        let pool = WorkerPool::default();
        let err = pool
            .run(|| Err::<(), _>(AttemptError::UnexpectedResponse("bad".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, AttemptError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_panic_becomes_worker_error() {
        let pool = WorkerPool::new(1);
        let err = pool
            .run(|| -> Result<(), AttemptError> { panic!("boom") })
            .await
            .unwrap_err();
        assert!(matches!(err, AttemptError::Worker(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrency_is_bounded() {
        let pool = WorkerPool::new(2);
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let jobs: Vec<_> = (0..6)
            .map(|_| {
                let pool = pool.clone();
                let running = Arc::clone(&running);
                let peak = Arc::clone(&peak);
                tokio::spawn(async move {
                    pool.run(move || {
                        let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                        peak.fetch_max(now, Ordering::SeqCst);
                        std::thread::sleep(Duration::from_millis(50));
                        running.fetch_sub(1, Ordering::SeqCst);
                        Ok(())
                    })
                    .await
                })
            })
            .collect();

        for job in jobs {
            job.await.unwrap().unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) <= 2);
        assert_eq!(pool.size(), 2);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        assert_eq!(WorkerPool::new(0).size(), 1);
    }
}
