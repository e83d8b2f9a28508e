use dioxus::core::Task;
use dioxus::prelude::*;
use services::Step;

use crate::views::ViewError;
use crate::vm::QuizVm;

/// Signals shared by the quiz view and its background timers.
#[derive(Clone, Copy)]
pub(super) struct QuizSignals {
    pub vm: Signal<QuizVm>,
    pub error: Signal<Option<ViewError>>,
    pub pending: Signal<Option<Task>>,
}

impl QuizSignals {
    /// Follow up on a controller step.
    ///
    /// Any non-ignored step replaces the pending timer. A scheduled step
    /// spawns a task that sleeps, fires the token and keeps going for as
    /// long as the controller hands back more work.
    pub(super) fn follow(self, step: Step) {
        if step.is_ignored() {
            return;
        }
        let mut pending = self.pending;
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        let Some(first) = step.scheduled() else {
            return;
        };

        let mut vm = self.vm;
        let mut error = self.error;
        let task = spawn(async move {
            let mut next = Some(first);
            while let Some(scheduled) = next.take() {
                tokio::time::sleep(scheduled.delay()).await;
                let fired = vm.write().fire(scheduled.token());
                match fired {
                    Ok(step) => next = step.scheduled(),
                    Err(err) => error.set(Some(err)),
                }
            }
        });
        pending.set(Some(task));
    }
}
