use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tp_domain::*;
use tp_planner::*;
use uuid::Uuid;

/// What a running planner reports to whoever launched it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum PlannerEvent {
    Step {
        run_id: Uuid,
        step: Step,
    },
    PlanningFinished {
        run_id: Uuid,
        plans: Vec<Plan>,
        discovered: Vec<ActionId>,
        finished_at: DateTime<Utc>,
    },
    Aborted {
        run_id: Uuid,
        error: String,
    },
}

impl PlannerEvent {
    pub fn run_id(&self) -> Uuid {
        match self {
            PlannerEvent::Step { run_id, .. } => *run_id,
            PlannerEvent::PlanningFinished { run_id, .. } => *run_id,
            PlannerEvent::Aborted { run_id, .. } => *run_id,
        }
    }

    pub fn to_json(&self) -> TPResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Forwards the finished plans to an event channel.
pub struct ChannelObserver {
    run_id: Uuid,
    tx: UnboundedSender<PlannerEvent>,
}

impl ChannelObserver {
    pub fn new(run_id: Uuid, tx: UnboundedSender<PlannerEvent>) -> Self {
        ChannelObserver { run_id, tx }
    }
}

impl<S> PlanningObserver<S> for ChannelObserver {
    fn planning_finished(&mut self, plans: &[SearchNode<S>], discovered: &IndexSet<ActionId>) {
        let event = PlannerEvent::PlanningFinished {
            run_id: self.run_id,
            plans: plans.iter().map(|p| p.to_plan()).collect(),
            discovered: discovered.iter().cloned().collect(),
            finished_at: Utc::now(),
        };
        if self.tx.send(event).is_err() {
            log_debug!("run {}: nobody is listening for the finished plans", self.run_id);
        }
    }
}
