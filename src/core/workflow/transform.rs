use regex::Regex;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::core::error::AppError;
use crate::core::workflow::document::WorkflowDocument;
use crate::core::workflow::guard;
use crate::core::workflow::step::{self, StepShape};

/// Pure transform from parsed workflow YAML to a reworked document. Takes the
/// tree by value and hands it back together with a change count.
pub trait WorkflowTransform {
    fn name(&self) -> &'static str;
    fn transform(&self, document: WorkflowDocument) -> Result<TransformOutcome, AppError>;
}

/// Result of one transform pass.
#[derive(Debug)]
pub struct TransformOutcome {
    pub document: WorkflowDocument,
    pub changed_steps: usize,
}

/// Prepends the DEPLOY_ENABLED guard to every unguarded deploy-related
/// `run` step under `jobs.<name>.steps`.
pub struct GuardDeploySteps;

impl WorkflowTransform for GuardDeploySteps {
    fn name(&self) -> &'static str {
        "GuardDeploySteps"
    }

    fn transform(&self, mut document: WorkflowDocument) -> Result<TransformOutcome, AppError> {
        let pattern = guard::deploy_pattern()?;
        let changed_steps = match document.jobs_mut() {
            Some(jobs) => guard_jobs(jobs, pattern),
            None => 0,
        };
        debug!(
            transform = self.name(),
            changed_steps, "transform pass complete"
        );
        Ok(TransformOutcome {
            document,
            changed_steps,
        })
    }
}

fn guard_jobs(jobs: &mut Mapping, pattern: &Regex) -> usize {
    let mut changed = 0;
    for job in jobs.values_mut() {
        let Some(steps) = job.get_mut("steps").and_then(Value::as_sequence_mut) else {
            continue;
        };
        for entry in steps.iter_mut() {
            match step::classify(entry) {
                StepShape::Command { run } => {
                    if guard::apply_guard(run, pattern) {
                        changed += 1;
                    }
                }
                StepShape::Inert => {}
            }
        }
    }
    changed
}
