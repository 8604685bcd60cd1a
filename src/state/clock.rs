use crate::util::format_time;

// Seconds elapsed in the current test session
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedClock {
    pub seconds: u64,
}

impl ElapsedClock {
    pub fn starting_at(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn tick(&mut self) -> String {
        self.seconds += 1;
        self.display()
    }

    pub fn display(&self) -> String {
        format_time(self.seconds)
    }
}
