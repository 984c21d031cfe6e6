// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Timed refresh of one random unlocked slot.
//!
//! [`AutoRegenTimer`] owns at most one background task. The task sends an
//! [`AutoRegenTick`] every `BASE_INTERVAL / speed`, and the owner of the
//! [`crate::StudioState`] answers each tick with
//! [`crate::StudioAction::AutoRegenerateRandomSlot`]. Changing the speed stops the
//! running task before a new one is spawned, so timers never pile up.
//!
//! A tick may already sit in the channel when the speed changes. Each tick carries the
//! generation of the task that sent it, and [`AutoRegenTimer::accepts`] rejects ticks
//! from any task other than the current one.

use std::time::Duration;

use tokio::{sync::{broadcast, mpsc},
            task::JoinHandle,
            time::{Instant, MissedTickBehavior, interval_at}};

use crate::ANIMATION_SPEED_RANGE;

/// Period at speed 1.
pub const BASE_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRegenTick {
    pub generation: u64,
    /// Counts from `0` within one generation.
    pub sequence: u64,
}

/// `None` for speed `0`. Speeds above the max are treated as the max.
#[must_use]
pub fn tick_period(speed: u8) -> Option<Duration> {
    let speed = speed.min(*ANIMATION_SPEED_RANGE.end());
    (speed > 0).then(|| BASE_INTERVAL / u32::from(speed))
}

#[derive(Debug)]
struct RunningTask {
    shutdown_sender: broadcast::Sender<()>,
    join_handle: JoinHandle<()>,
}

#[derive(Debug)]
pub struct AutoRegenTimer {
    speed: u8,
    generation: u64,
    tick_sender: mpsc::Sender<AutoRegenTick>,
    maybe_running_task: Option<RunningTask>,
}

impl AutoRegenTimer {
    /// Stopped, at speed `0`.
    #[must_use]
    pub fn new(tick_sender: mpsc::Sender<AutoRegenTick>) -> Self {
        Self {
            speed: 0,
            generation: 0,
            tick_sender,
            maybe_running_task: None,
        }
    }

    /// A stopped timer plus the receiving end of its ticks.
    #[must_use]
    pub fn with_channel(buffer: usize) -> (Self, mpsc::Receiver<AutoRegenTick>) {
        let (tick_sender, tick_receiver) = mpsc::channel(buffer.max(1));
        (Self::new(tick_sender), tick_receiver)
    }

    #[must_use]
    pub fn speed(&self) -> u8 { self.speed }

    #[must_use]
    pub fn is_running(&self) -> bool { self.maybe_running_task.is_some() }

    /// True only for ticks sent by the task that is running right now.
    #[must_use]
    pub fn accepts(&self, tick: &AutoRegenTick) -> bool {
        self.is_running() && tick.generation == self.generation
    }

    /// Cancel the running task (if any), then start a new one unless `speed` is `0`.
    /// Must be called from within a Tokio runtime.
    pub fn set_speed(&mut self, speed: u8) {
        self.stop();
        self.speed = speed.min(*ANIMATION_SPEED_RANGE.end());

        let Some(period) = tick_period(self.speed) else {
            return;
        };

        self.generation += 1;
        let generation = self.generation;
        let tick_sender = self.tick_sender.clone();
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel::<()>(1);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "⏱️ auto regen start",
            speed = %self.speed,
            period_ms = %period.as_millis(),
            generation = %generation
        );

        let join_handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut sequence = 0;

            loop {
                tokio::select! {
                    // This branch is cancel safe because recv is cancel safe.
                    _ = shutdown_receiver.recv() => break,

                    // This branch is cancel safe because tick is cancel safe.
                    _ = interval.tick() => {
                        let tick = AutoRegenTick { generation, sequence };
                        if tick_sender.send(tick).await.is_err() {
                            // Receiver is gone, nobody is listening.
                            break;
                        }
                        sequence += 1;
                    }
                }
            }
        });

        self.maybe_running_task = Some(RunningTask {
            shutdown_sender,
            join_handle,
        });
    }

    /// Cancel immediately. Does nothing if already stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.maybe_running_task.take() {
            // We don't care about the result of this operation.
            task.shutdown_sender.send(()).ok();
            task.join_handle.abort();

            // % is Display, ? is Debug.
            tracing::debug!(message = "⏱️ auto regen stop", generation = %self.generation);
        }
    }
}

impl Drop for AutoRegenTimer {
    fn drop(&mut self) { self.stop(); }
}

#[cfg(test)]
mod tests {
    use tokio::time::timeout;

    use super::*;
    use crate::assert_eq2;

    async fn count_ticks_within(
        receiver: &mut mpsc::Receiver<AutoRegenTick>,
        timer: &AutoRegenTimer,
        window: Duration,
    ) -> usize {
        let deadline = Instant::now() + window;
        let mut count = 0;
        while let Ok(Some(tick)) =
            timeout(deadline.saturating_duration_since(Instant::now()), receiver.recv())
                .await
        {
            if timer.accepts(&tick) {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn test_tick_period() {
        assert_eq2!(tick_period(0), None);
        assert_eq2!(tick_period(1), Some(Duration::from_millis(3000)));
        assert_eq2!(tick_period(2), Some(Duration::from_millis(1500)));
        assert_eq2!(tick_period(5), Some(Duration::from_millis(600)));
        assert_eq2!(tick_period(9), Some(Duration::from_millis(600)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_zero_never_ticks() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(8);
        timer.set_speed(0);
        assert!(!timer.is_running());
        assert!(timeout(Duration::from_secs(60), receiver.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(8);
        let start = Instant::now();
        timer.set_speed(1);

        let tick = receiver.recv().await.unwrap();
        assert_eq2!(tick.sequence, 0);
        assert!(timer.accepts(&tick));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(3010), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_five_ticks_every_600ms() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(64);
        timer.set_speed(5);
        let count = count_ticks_within(&mut receiver, &timer, Duration::from_millis(3100)).await;
        assert_eq2!(count, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_changing_speed_does_not_accumulate_timers() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(64);
        timer.set_speed(1);
        timer.set_speed(3);
        timer.set_speed(5);
        assert_eq2!(timer.speed(), 5);

        // Only the speed 5 task runs: 600, 1200, ... 5400. A leftover speed 1 or 3 task
        // would add ticks at 1000 and 3000.
        let count = count_ticks_within(&mut receiver, &timer, Duration::from_millis(5900)).await;
        assert_eq2!(count, 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticks_are_rejected() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(8);
        timer.set_speed(5);
        let stale = receiver.recv().await.unwrap();
        timer.set_speed(2);
        assert!(!timer.accepts(&stale));

        let fresh = receiver.recv().await.unwrap();
        assert!(timer.accepts(&fresh));
        assert_eq2!(fresh.sequence, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_immediate() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(8);
        timer.set_speed(5);
        timer.stop();
        assert!(!timer.is_running());
        assert!(timeout(Duration::from_secs(60), receiver.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (mut timer, mut receiver) = AutoRegenTimer::with_channel(8);
        timer.set_speed(4);
        drop(timer);

        // Both senders (timer and task) are gone, so the channel closes.
        assert_eq2!(receiver.recv().await, None);
    }
}
