mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{OptionVm, QuizIntent, QuizVm};
pub use time_fmt::format_remaining;
