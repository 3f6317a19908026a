pub mod contact;
pub mod modal;
pub mod particles;
pub mod scroll;
pub mod theme;

// transient status
//
// several parts of the page show a status that should revert on its own after a
// fixed delay (the contact banner, the "Copied!" tooltip).  the delay is driven by
// a browser timer that we never cancel, so a timer left over from an earlier
// status could clear a newer one.  every set() hands out a ticket, and expire()
// only resets the value if the ticket is still the most recent one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transient<T: Clone + Default + PartialEq> {
    value: T,
    generation: u64,
}

impl<T: Clone + Default + PartialEq> Transient<T> {
    pub fn new() -> Self {
        Transient {
            value: T::default(),
            generation: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.value = value;
        self.generation
    }

    // returns true if the value was reset
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation {
            return false;
        }

        self.value = T::default();
        true
    }
}

// feedback for the hero's copy-email button
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    // how long the tooltip stays up, in milliseconds
    pub fn duration_ms(self) -> u32 {
        match self {
            CopyFeedback::Idle => 0,
            CopyFeedback::Copied => 2000,
            CopyFeedback::Failed => 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_expires_with_current_ticket() {
        let mut status = Transient::<CopyFeedback>::new();
        let ticket = status.set(CopyFeedback::Copied);

        assert_eq!(*status.get(), CopyFeedback::Copied);
        assert!(status.expire(ticket));
        assert_eq!(*status.get(), CopyFeedback::Idle);
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_value() {
        let mut status = Transient::<CopyFeedback>::new();
        let first = status.set(CopyFeedback::Copied);
        let second = status.set(CopyFeedback::Failed);

        assert!(!status.expire(first));
        assert_eq!(*status.get(), CopyFeedback::Failed);

        assert!(status.expire(second));
        assert_eq!(*status.get(), CopyFeedback::Idle);
    }

    #[test]
    fn feedback_durations() {
        assert_eq!(CopyFeedback::Copied.duration_ms(), 2000);
        assert_eq!(CopyFeedback::Failed.duration_ms(), 3000);
    }
}
