use dioxus::prelude::*;

use crate::vm::{OptionVm, QuizIntent};

#[component]
pub(super) fn OptionButton(index: usize, option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let label = option.label.clone();
    rsx! {
        button {
            id: "quiz-option-{index}",
            class: "{option.class} option m-1",
            r#type: "button",
            disabled: option.disabled,
            onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
            "{option.label}"
        }
    }
}

#[component]
pub(super) fn StatusLine(text: String, class: &'static str) -> Element {
    rsx! {
        div { id: "quiz-message", class: "{class} message", role: "status", "{text}" }
    }
}
