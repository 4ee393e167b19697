use crate::*;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tp_domain::*;
use tp_planner::*;
use uuid::Uuid;

/// Steps the planner to completion, yielding to the scheduler between steps.
///
/// Every step is reported on `events`. Cancellation and the deadline are
/// checked before each step, so a step in progress always finishes.
pub async fn launch_planner<M, C>(
    mut planner: HillClimbing<M, C>,
    run_id: Uuid,
    events: UnboundedSender<PlannerEvent>,
    cancel: watch::Receiver<bool>,
    deadline: Option<Duration>,
) -> TPResult<PlanningOutcome<M::State>>
where
    M: ModelProvider,
    C: ReferenceCorpus,
    M::State: 'static,
{
    log_info!("run {}: planning started", run_id);
    let started = Instant::now();
    planner.add_observer(ChannelObserver::new(run_id, events.clone()));

    loop {
        let cancelled = *cancel.borrow();
        let result = if cancelled {
            Err(TPError::Cancelled)
        } else if deadline.map(|d| started.elapsed() >= d).unwrap_or(false) {
            Err(TPError::DeadlineExceeded)
        } else {
            planner.step()
        };

        let step = match result {
            Ok(step) => step,
            Err(e) => {
                log_warn!("run {}: {}", run_id, e);
                let aborted = PlannerEvent::Aborted {
                    run_id,
                    error: e.to_string(),
                };
                if events.send(aborted).is_err() {
                    log_debug!("run {}: nobody is listening for the abort", run_id);
                }
                return Err(e);
            }
        };

        let complete = step == Step::Complete;
        if events.send(PlannerEvent::Step { run_id, step }).is_err() {
            log_debug!("run {}: nobody is listening for steps", run_id);
        }
        if complete {
            break;
        }
        tokio::task::yield_now().await;
    }

    log_info!(
        "run {}: planning finished after {} ms",
        run_id,
        started.elapsed().as_millis()
    );
    Ok(planner.into_outcome())
}

pub struct PlannerHandle<S> {
    pub run_id: Uuid,
    pub events: UnboundedReceiver<PlannerEvent>,
    cancel: watch::Sender<bool>,
    join: JoinHandle<TPResult<PlanningOutcome<S>>>,
}

impl<S> PlannerHandle<S> {
    /// Asks the planner to stop before its next step.
    ///
    /// Returns false when the planner task has already finished.
    pub fn cancel(&self) -> bool {
        let sent = self.cancel.send(true).is_ok();
        if !sent {
            log_debug!("run {}: cancel requested after the planner stopped", self.run_id);
        }
        sent
    }

    pub async fn join(self) -> TPResult<PlanningOutcome<S>> {
        match self.join.await {
            Ok(result) => result,
            Err(e) => Err(TPError::from_any(e)),
        }
    }
}

/// Runs the planner on its own tokio task.
pub fn spawn_planner<M, C>(
    planner: HillClimbing<M, C>,
    deadline: Option<Duration>,
) -> PlannerHandle<M::State>
where
    M: ModelProvider + Send + 'static,
    C: ReferenceCorpus + Send + 'static,
    M::State: Send + 'static,
{
    let run_id = Uuid::new_v4();
    let (tx_events, rx_events) = unbounded_channel();
    let (tx_cancel, rx_cancel) = watch::channel(false);

    let join = tokio::spawn(launch_planner(
        planner, run_id, tx_events, rx_cancel, deadline,
    ));

    PlannerHandle {
        run_id,
        events: rx_events,
        cancel: tx_cancel,
        join,
    }
}
