use dioxus::core::Task;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizIntent, QuizVm};

use super::components::{OptionButton, StatusLine};
use super::schedule::QuizSignals;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let game_loop = ctx.game_loop();

    let vm = use_signal({
        let game_loop = game_loop.clone();
        move || QuizVm::new(game_loop.new_controller())
    });
    let error = use_signal(|| None::<ViewError>);
    let pending = use_signal(|| None::<Task>);
    let signals = QuizSignals { vm, error, pending };

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;

        match intent {
            QuizIntent::Start => {
                let begun = vm.write().begin_loading();
                if let Err(err) = begun {
                    error.set(Some(err));
                    return;
                }
                error.set(None);
                let game_loop = game_loop.clone();
                spawn(async move {
                    let loaded = game_loop.load_session().await;
                    let applied = vm.write().finish_loading(loaded);
                    match applied {
                        Ok(step) => signals.follow(step),
                        Err(err) => error.set(Some(err)),
                    }
                });
            }
            QuizIntent::Select(option) => {
                let selected = vm.write().select(&option);
                match selected {
                    Ok(step) => signals.follow(step),
                    Err(err) => error.set(Some(err)),
                }
            }
            QuizIntent::Restart => {
                let restarted = vm.write().restart();
                match restarted {
                    Ok(()) => error.set(None),
                    Err(err) => error.set(Some(err)),
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let state = vm.read();
    let message_text = state.message_text().to_string();
    let message_class = state.message_class();
    let question = state.question_text().map(str::to_string);
    let options = state.options();
    let timer_label = state.timer_label();
    let show_start = state.show_start();
    let show_restart = state.show_restart();
    drop(state);

    rsx! {
        div { class: "quiz container text-center my-5", id: "quiz-root",
            h1 { class: "mb-4", "{ctx.title()}" }

            if show_start {
                button {
                    id: "quiz-start",
                    class: "btn btn-primary btn-lg mb-3",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                    "Start"
                }
            }

            StatusLine { text: message_text, class: message_class }

            if let Some(err) = *error.read() {
                p { class: "quiz-error text-danger", "{err.message()}" }
            }

            if let Some(label) = timer_label {
                div { id: "quiz-timer", class: "timer fw-bold mb-2", "{label}" }
            }

            if let Some(question) = question {
                div { class: "game mt-3",
                    h2 { id: "quiz-question", class: "question mb-3", "{question}" }
                    div { class: "options d-flex flex-wrap justify-content-center",
                        for (index, option) in options.into_iter().enumerate() {
                            OptionButton {
                                key: "{index}",
                                index,
                                option,
                                on_intent: dispatch_intent,
                            }
                        }
                    }
                }
            }

            if show_restart {
                button {
                    id: "quiz-restart",
                    class: "btn btn-success btn-lg mt-3",
                    r#type: "button",
                    onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                    "Restart"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
