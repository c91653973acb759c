//! Timer-driven simulated flows
//!
//! The prototype fakes long-running work (cover scanning, book recognition)
//! with a progress counter that advances on a timer and then reports a
//! canned result. [`SimulatedTask`] runs that counter on a tokio task and
//! streams [`TaskEvent`]s to the owning screen.
//!
//! The task stops when its handle is dropped or cancelled, so nothing is
//! delivered to a screen that has already gone away.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::StepConfig;

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// Step outside 1..=100
    #[error("Invalid progress step: {0} (must be within 1..=100)")]
    InvalidStep(u32),

    /// Zero tick interval
    #[error("Tick interval must be non-zero")]
    ZeroInterval,

    /// The task ended without reporting a result
    #[error("Task '{0}' ended before completing")]
    ChannelClosed(String),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Progress report from a simulated task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent<T> {
    /// Percentage complete, ending at 100
    Progress(u8),
    /// Final result, sent once after `Progress(100)`
    Completed(T),
}

/// Handle to a running simulated task
///
/// Dropping the handle stops the timer.
pub struct SimulatedTask<T> {
    name: String,
    events: mpsc::Receiver<TaskEvent<T>>,
    stop_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> SimulatedTask<T> {
    /// Start a task that counts to 100 by `config.step` every
    /// `config.interval()`, then reports `result`.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(name: impl Into<String>, config: StepConfig, result: T) -> Result<Self> {
        if config.step == 0 || config.step > 100 {
            return Err(SimulationError::InvalidStep(config.step));
        }
        if config.interval_ms == 0 {
            return Err(SimulationError::ZeroInterval);
        }

        let name = name.into();
        let (tx, events) = mpsc::channel(config.ticks() as usize + 1);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let period = config.interval();
        let step = config.step;
        let task_name = name.clone();

        tracing::debug!(task = %name, step, interval_ms = config.interval_ms, "simulated task started");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            let mut result = Some(result);
            let mut progress = 0u32;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        progress = (progress + step).min(100);
                        tracing::trace!(task = %task_name, progress, "tick");
                        if tx.send(TaskEvent::Progress(progress as u8)).await.is_err() {
                            break;
                        }
                        if progress == 100 {
                            if let Some(result) = result.take() {
                                let _ = tx.send(TaskEvent::Completed(result)).await;
                            }
                            tracing::debug!(task = %task_name, "simulated task completed");
                            break;
                        }
                    }
                    _ = &mut stop_rx => {
                        tracing::debug!(task = %task_name, progress, "simulated task stopped");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            name,
            events,
            stop_tx: Some(stop_tx),
            handle,
        })
    }

    /// Task name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Next event, or `None` once the task has finished or been stopped
    pub async fn next_event(&mut self) -> Option<TaskEvent<T>> {
        self.events.recv().await
    }

    /// Wait for the result, discarding progress events
    pub async fn wait(mut self) -> Result<T> {
        while let Some(event) = self.next_event().await {
            if let TaskEvent::Completed(result) = event {
                return Ok(result);
            }
        }
        Err(SimulationError::ChannelClosed(self.name.clone()))
    }

    /// Stop the timer; no further events are produced
    pub fn cancel(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
        self.events.close();
        // Drop anything already buffered so late polls see `None`
        while self.events.try_recv().is_ok() {}
    }

    /// Whether the background task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Drop for SimulatedTask<T> {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn collect<T: Send + 'static>(task: &mut SimulatedTask<T>) -> Vec<TaskEvent<T>> {
        let mut events = Vec::new();
        while let Some(event) = task.next_event().await {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_then_result() {
        let mut task = SimulatedTask::spawn("scan", StepConfig::new(30, 100), "hobbit").unwrap();
        let events = collect(&mut task).await;

        assert_eq!(
            events,
            vec![
                TaskEvent::Progress(30),
                TaskEvent::Progress(60),
                TaskEvent::Progress(90),
                TaskEvent::Progress(100),
                TaskEvent::Completed("hobbit"),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_interval() {
        let start = Instant::now();
        let mut task = SimulatedTask::spawn("scan", StepConfig::new(50, 200), ()).unwrap();

        assert_eq!(task.next_event().await, Some(TaskEvent::Progress(50)));
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_returns_result() {
        let task = SimulatedTask::spawn("recognition", StepConfig::new(25, 500), 42u32).unwrap();
        assert_eq!(task.wait().await, Ok(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_events() {
        let mut task = SimulatedTask::spawn("scan", StepConfig::new(10, 100), ()).unwrap();
        assert_eq!(task.next_event().await, Some(TaskEvent::Progress(10)));

        task.cancel();
        tokio::time::advance(Duration::from_secs(5)).await;

        assert_eq!(task.next_event().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_buffered_progress() {
        let mut task = SimulatedTask::spawn("scan", StepConfig::new(10, 100), ()).unwrap();

        // Three ticks land in the channel without being read
        tokio::time::sleep(Duration::from_millis(350)).await;
        task.cancel();

        let events = collect(&mut task).await;
        assert!(events.is_empty(), "delivered after cancel: {:?}", events);
    }

    #[tokio::test(start_paused = true)]
    async fn test_finished_after_completion() {
        let mut task = SimulatedTask::spawn("scan", StepConfig::new(100, 100), ()).unwrap();
        assert!(!task.is_finished());

        let events = collect(&mut task).await;
        assert_eq!(events.len(), 2);
        tokio::task::yield_now().await;
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_rejects_invalid_config() {
        assert_eq!(
            SimulatedTask::spawn("scan", StepConfig::new(0, 100), ()).err(),
            Some(SimulationError::InvalidStep(0))
        );
        assert_eq!(
            SimulatedTask::spawn("scan", StepConfig::new(101, 100), ()).err(),
            Some(SimulationError::InvalidStep(101))
        );
        assert_eq!(
            SimulatedTask::spawn("scan", StepConfig::new(10, 0), ()).err(),
            Some(SimulationError::ZeroInterval)
        );
    }
}
