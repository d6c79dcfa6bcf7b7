//! Sequencing of fallible bootstrap steps.

use log::debug;

use crate::runner::CommandResult;

/// What to do with the remaining steps once one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Run every step regardless of earlier failures.
    ContinueOnError,
    /// Skip the remaining steps after the first failure.
    StopOnError,
}

/// A named unit of work in a sequence.
pub struct Step<'a> {
    pub name: String,
    action: Box<dyn FnOnce() -> CommandResult + 'a>,
}

impl<'a> Step<'a> {
    pub fn new<S, F>(name: S, action: F) -> Self
    where
        S: Into<String>,
        F: FnOnce() -> CommandResult + 'a,
    {
        Self { name: name.into(), action: Box::new(action) }
    }
}

/// Per-step outcome of a sequence. Skipped steps have no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequenceOutcome {
    pub results: Vec<(String, CommandResult)>,
    pub skipped: Vec<String>,
}

impl SequenceOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.skipped.is_empty() && self.results.iter().all(|(_, result)| result.success)
    }
}

/// Runs `steps` in order under `policy`.
pub fn run_sequence(policy: Policy, steps: Vec<Step<'_>>) -> SequenceOutcome {
    let mut outcome = SequenceOutcome::default();
    let mut halted = false;

    for step in steps {
        if halted {
            debug!("Skipping step '{}'", step.name);
            outcome.skipped.push(step.name);
            continue;
        }

        let result = (step.action)();
        if !result.success && policy == Policy::StopOnError {
            debug!("Step '{}' failed, stopping sequence", step.name);
            halted = true;
        }
        outcome.results.push((step.name, result));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn steps<'a>(
        log: &'a RefCell<Vec<&'static str>>,
        plan: &[(&'static str, bool)],
    ) -> Vec<Step<'a>> {
        plan.iter()
            .map(|&(name, success)| {
                Step::new(name, move || {
                    log.borrow_mut().push(name);
                    CommandResult::from(success)
                })
            })
            .collect()
    }

    #[test]
    fn test_continue_on_error_runs_everything() {
        let log = RefCell::new(Vec::new());
        let outcome = run_sequence(
            Policy::ContinueOnError,
            steps(&log, &[("a", false), ("b", true), ("c", false)]),
        );

        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(outcome.results.len(), 3);
        assert!(outcome.skipped.is_empty());
        assert!(!outcome.all_succeeded());
    }

    #[test]
    fn test_stop_on_error_skips_the_rest() {
        let log = RefCell::new(Vec::new());
        let plan = [("a", true), ("b", false), ("c", true)];
        let outcome = run_sequence(Policy::StopOnError, steps(&log, &plan));

        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(outcome.skipped, vec!["c".to_string()]);
    }

    #[test]
    fn test_empty_sequence_succeeds() {
        assert!(run_sequence(Policy::StopOnError, Vec::new()).all_succeeded());
    }
}
