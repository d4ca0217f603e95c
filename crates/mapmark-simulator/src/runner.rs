//! Periodic simulation ticks on a Tokio task.

use crate::simulator::{IconSurface, SimulationParams, Simulator};
use mapmark_core::{thread_safe, SimulationError, ThreadSafe};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Starts and stops a simulation run.
///
/// Stopping is cooperative: the running flag is cleared and the tick task
/// notices on its next wake-up, so at most one more tick may fire. By then
/// the icons have been reset and that tick does nothing.
pub struct SimulationController<S: IconSurface + Send + 'static> {
    /// Simulator shared with the tick task
    simulator: ThreadSafe<Simulator<S>>,
    /// Cleared to stop the current run
    running: Arc<AtomicBool>,
    /// Tick task of the current run
    tick_task: Option<JoinHandle<()>>,
}

impl<S: IconSurface + Send + 'static> SimulationController<S> {
    pub fn new(simulator: Simulator<S>) -> Self {
        Self {
            simulator: thread_safe(simulator),
            running: Arc::new(AtomicBool::new(false)),
            tick_task: None,
        }
    }

    /// Validates `params`, generates icons and starts ticking.
    ///
    /// A run already in progress is stopped first. Must be called from within
    /// a Tokio runtime. Returns the number of icons placed.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Result<usize, SimulationError> {
        params.validate()?;
        let period = params.refresh_period()?;
        if self.is_running() {
            self.stop();
        }

        let placed = self.simulator.lock().generate(params, rng);

        // each run gets its own flag
        let running = Arc::new(AtomicBool::new(true));
        self.running = running.clone();
        let simulator = self.simulator.clone();

        self.tick_task = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if !running.load(Ordering::SeqCst) {
                    break;
                }
                simulator.lock().update();
            }
            tracing::debug!("Simulation tick task exited");
        }));

        tracing::info!(
            "Simulation started with {} icons every {}s",
            placed,
            params.refresh_rate_secs
        );
        Ok(placed)
    }

    /// Stops ticking and removes every icon.
    pub fn stop(&mut self) {
        let was_running = self.running.swap(false, Ordering::SeqCst);
        self.simulator.lock().reset();
        if was_running {
            tracing::info!("Simulation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Shared handle to the simulator, for inspection.
    pub fn simulator(&self) -> ThreadSafe<Simulator<S>> {
        self.simulator.clone()
    }

    /// Waits for the tick task of a stopped run to exit.
    pub async fn join(&mut self) {
        if let Some(task) = self.tick_task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Simulation tick task failed: {}", e);
            }
        }
    }
}

impl<S: IconSurface + Send + 'static> Drop for SimulationController<S> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
    }
}
