/// Cancel-and-reschedule debounce with caller-owned state.
///
/// Every trigger re-arms a deadline; [`ready`](Self::ready) reports at most
/// once per arming, as soon as the deadline has passed. The caller supplies
/// the clock, so firing is deterministic and testable without wall-clock
/// delays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debounce {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub const fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Arms the deadline `delay_ms` after `now_ms`, superseding any earlier
    /// arming.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// True once per arming, as soon as the deadline has passed.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
