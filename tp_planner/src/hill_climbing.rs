//! Hill-climbing plan generation.
//!
//! Plans are grown one action at a time from the entry component until every
//! action of the universe has been taken by some plan. Each call to
//! [`HillClimbing::step`] performs one transition of the state machine:
//!
//! ```text
//! Seed -> Grow -> Grow -> ... -> Finish -> Seed -> ... -> Complete
//! ```

use crate::*;
use serde::{Deserialize, Serialize};
use tp_domain::*;

/// Receives the generated plans once planning is done.
pub trait PlanningObserver<S> {
    fn planning_finished(&mut self, plans: &[SearchNode<S>], discovered: &IndexSet<ActionId>);
}

/// Why a plan stopped growing.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum EndReason {
    NoPossibleActions,
    NothingToChoose,
    MaxLength,
    CoverageReached,
}

/// The outcome of one call to [`HillClimbing::step`].
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Step {
    Seeded {
        plan_index: usize,
    },
    Advanced {
        plan_index: usize,
        action: ActionId,
    },
    Backtracked {
        plan_index: usize,
        action: ActionId,
        loop_start: usize,
        resumed_at: usize,
    },
    LoopTolerated {
        plan_index: usize,
        action: ActionId,
        loop_start: usize,
    },
    Ended {
        plan_index: usize,
        reason: EndReason,
    },
    Finished {
        plan_index: usize,
        length: usize,
    },
    Complete,
}

#[derive(Debug)]
pub struct PlanningOutcome<S> {
    pub plans: Vec<SearchNode<S>>,
    pub discovered: IndexSet<ActionId>,
}

impl<S> PlanningOutcome<S> {
    pub fn plans(&self) -> Vec<Plan> {
        self.plans.iter().map(|p| p.to_plan()).collect()
    }

    /// The generated plans with every subsumed plan removed.
    pub fn minimum_plans(&self) -> Vec<Plan> {
        reduce_to_minimum_set(&self.plans())
    }
}

enum Phase<S> {
    Seed,
    Grow {
        node: SearchNode<S>,
        history: Vec<SearchNode<S>>,
    },
    Finish {
        node: SearchNode<S>,
    },
    Complete,
    Aborted(TPError),
}

pub struct HillClimbing<M: ModelProvider, C = OccurrenceCounts> {
    model: M,
    corpus: C,
    config: PlannerConfig,
    entry: ComponentInstance,
    reference_plans: Vec<Plan>,
    discovered: IndexSet<ActionId>,
    counts: ActionCounts,
    satisfied: FxHashSet<ActionId>,
    plans: Vec<SearchNode<M::State>>,
    phase: Phase<M::State>,
    observers: Vec<Box<dyn PlanningObserver<M::State> + Send>>,
}

impl<M: ModelProvider> HillClimbing<M, OccurrenceCounts> {
    /// Plans for every action the model defines, without reference plans.
    pub fn for_model(model: M, config: PlannerConfig) -> TPResult<Self> {
        let discovered = model.discovered_actions()?;
        HillClimbing::new(model, OccurrenceCounts, vec![], discovered, config)
    }
}

impl<M: ModelProvider, C: ReferenceCorpus> HillClimbing<M, C> {
    pub fn new(
        model: M,
        corpus: C,
        reference_plans: Vec<Plan>,
        discovered: IndexSet<ActionId>,
        config: PlannerConfig,
    ) -> TPResult<Self> {
        config.validate()?;
        let counts = corpus.calculate_action_counts(&reference_plans, &discovered);
        let entry = find_entry_component(&model.component_types()?)?;
        log_info!(
            "hill climbing over {} actions from entry component '{}' ({})",
            counts.len(),
            entry.name,
            entry.component_type
        );

        Ok(HillClimbing {
            model,
            corpus,
            config,
            entry,
            reference_plans,
            discovered,
            counts,
            satisfied: FxHashSet::default(),
            plans: vec![],
            phase: Phase::Seed,
            observers: vec![],
        })
    }

    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: PlanningObserver<M::State> + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn satisfied_actions(&self) -> &FxHashSet<ActionId> {
        &self.satisfied
    }

    pub fn action_counts(&self) -> &ActionCounts {
        &self.counts
    }

    pub fn plans(&self) -> &[SearchNode<M::State>] {
        &self.plans
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }

    fn coverage_reached(&self) -> bool {
        self.satisfied.len() >= self.counts.len()
    }

    /// Advances planning by one transition.
    ///
    /// After completion this keeps returning [`Step::Complete`]; after a fatal
    /// error it keeps returning that error.
    pub fn step(&mut self) -> TPResult<Step> {
        if let Phase::Aborted(e) = &self.phase {
            return Err(e.clone());
        }
        let result = match std::mem::replace(&mut self.phase, Phase::Complete) {
            Phase::Seed => self.seed(),
            Phase::Grow { node, history } => self.grow(node, history),
            Phase::Finish { node } => self.finish(node),
            Phase::Complete | Phase::Aborted(_) => Ok(Step::Complete),
        };
        if let Err(e) = &result {
            log_error!("planning aborted: {}", e);
            self.phase = Phase::Aborted(e.clone());
        }
        result
    }

    /// Steps until planning is complete.
    pub fn run(mut self) -> TPResult<PlanningOutcome<M::State>> {
        while self.step()? != Step::Complete {}
        Ok(self.into_outcome())
    }

    pub fn into_outcome(self) -> PlanningOutcome<M::State> {
        PlanningOutcome {
            plans: self.plans,
            discovered: self.discovered,
        }
    }

    fn seed(&mut self) -> TPResult<Step> {
        if self.coverage_reached() {
            log_info!(
                "planning complete: {} plans cover {} actions",
                self.plans.len(),
                self.satisfied.len()
            );
            for o in self.observers.iter_mut() {
                o.planning_finished(&self.plans, &self.discovered);
            }
            return Ok(Step::Complete);
        }

        let plan_index = self.plans.len();
        let mut node = SearchNode::new(self.model.new_state());
        self.model.create_component(&mut node.state, &self.entry)?;
        node.test_case.push(TestCaseEntry::Component(self.entry.clone()));
        node.actions = self.model.possible_actions(&node)?;
        log_info!(
            "seeded plan {} with {} possible actions",
            plan_index,
            node.actions.len()
        );

        self.phase = Phase::Grow {
            node,
            history: vec![],
        };
        Ok(Step::Seeded { plan_index })
    }

    fn end(&mut self, node: SearchNode<M::State>, reason: EndReason) -> TPResult<Step> {
        let plan_index = self.plans.len();
        if node.path.is_empty() {
            return Err(TPError::NoActionsInStartingState {
                component: self.entry.component_type.clone(),
                plan_index,
            });
        }
        self.phase = Phase::Finish { node };
        Ok(Step::Ended { plan_index, reason })
    }

    fn grow(
        &mut self,
        mut node: SearchNode<M::State>,
        mut history: Vec<SearchNode<M::State>>,
    ) -> TPResult<Step> {
        let plan_index = self.plans.len();
        if node.path.len() >= self.config.max_plan_length {
            return self.end(node, EndReason::MaxLength);
        }
        if self.coverage_reached() {
            return self.end(node, EndReason::CoverageReached);
        }

        node.forbid_last_action();
        if !node.has_possible_actions() {
            return self.end(node, EndReason::NoPossibleActions);
        }
        let action = match choose_action(&node, &self.counts, &self.satisfied) {
            Some(action) => action,
            None => return self.end(node, EndReason::NothingToChoose),
        };

        node.push_action(action.clone());
        self.model.apply_effects(&action, &mut node)?;
        node.actions = self.model.possible_actions(&node)?;
        self.satisfied.insert(action.clone());

        let pruned = prune_existing_plans(&self.reference_plans, &self.satisfied);
        if pruned.len() != self.reference_plans.len() {
            self.reference_plans = pruned;
            self.counts = self
                .corpus
                .calculate_action_counts(&self.reference_plans, &self.discovered);
        }

        let step = match detect_loop(&node) {
            Some(loop_start) => match backtrack(&mut history, loop_start) {
                Some(restart) => {
                    log_debug!(
                        "plan {}: loop at {} after {}, backtracked to length {}",
                        plan_index,
                        loop_start,
                        action,
                        restart.path.len()
                    );
                    let resumed_at = restart.path.len();
                    node = restart;
                    Step::Backtracked {
                        plan_index,
                        action,
                        loop_start,
                        resumed_at,
                    }
                }
                None => {
                    log_warn!(
                        "plan {}: loop at {} after {}, no snapshot to backtrack to",
                        plan_index,
                        loop_start,
                        action
                    );
                    Step::LoopTolerated {
                        plan_index,
                        action,
                        loop_start,
                    }
                }
            },
            None => {
                history.push(node.clone());
                Step::Advanced { plan_index, action }
            }
        };

        self.phase = Phase::Grow { node, history };
        Ok(step)
    }

    fn finish(&mut self, node: SearchNode<M::State>) -> TPResult<Step> {
        let plan_index = self.plans.len();
        if let Some(duplicate_of) = find_duplicate(&self.plans, &node) {
            return Err(TPError::DuplicatePlan {
                plan_index,
                duplicate_of,
            });
        }
        let length = node.path.len();
        log_info!(
            "plan {} finished with {} actions, {} of {} actions satisfied",
            plan_index,
            length,
            self.satisfied.len(),
            self.counts.len()
        );
        self.plans.push(node);
        self.phase = Phase::Seed;
        Ok(Step::Finished { plan_index, length })
    }
}

/// Generates plans with the algorithm selected in `config`.
pub fn create_plans<M: ModelProvider>(
    model: M,
    reference_plans: Vec<Plan>,
    discovered: IndexSet<ActionId>,
    config: &PlannerConfig,
) -> TPResult<PlanningOutcome<M::State>> {
    match config.algorithm {
        SearchAlgorithm::HillClimbing => HillClimbing::new(
            model,
            OccurrenceCounts,
            reference_plans,
            discovered,
            config.clone(),
        )?
        .run(),
    }
}
