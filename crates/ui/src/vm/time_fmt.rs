#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    format!("Time left: {seconds}s")
}
