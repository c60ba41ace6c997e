// runner.rs - Headless async driver on tokio
//
// Sleeps until the simulator's pending tick is due, polls it, repeats.
// Runs on the caller's task, so the surface does not need to be Send.

use tokio::sync::oneshot;
use tokio::time::{self, Instant};

use crate::simulator::Simulator;
use crate::surface::Surface;

/// Drives `simulator` until `shutdown` fires (or its sender is dropped),
/// then stops it. Starts the simulation first if nothing is pending.
/// Returns the number of ticks that ran.
pub async fn run<S: Surface>(simulator: &mut Simulator<S>, mut shutdown: oneshot::Receiver<()>) -> u64 {
    if !simulator.is_running() {
        simulator.start(Instant::now().into_std());
    }

    let mut ticks = 0;
    while let Some(deadline) = simulator.next_tick_at() {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = time::sleep_until(Instant::from_std(deadline)) => {
                if simulator.poll(Instant::now().into_std()).is_some() {
                    ticks += 1;
                }
            }
        }
    }

    simulator.stop();
    log::info!("runner finished after {ticks} ticks");
    ticks
}
