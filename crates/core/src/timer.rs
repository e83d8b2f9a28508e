/// Result of advancing a [`Countdown`] by one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    Running { remaining: u32 },
    Expired,
}

/// Pure countdown value. The caller decides how long a unit lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self { remaining: total }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consume one unit. Ticking an expired countdown stays expired.
    pub fn tick(&mut self) -> CountdownTick {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running {
                remaining: self.remaining,
            }
        }
    }
}
