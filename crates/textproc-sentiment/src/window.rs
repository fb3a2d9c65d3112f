//! Fixed-size look-back over recent token roles.

/// Upper bound on the negation window.
pub const MAX_NEGATION_WINDOW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Slot {
    #[default]
    Other,
    Negator,
}

/// Ring buffer holding the roles of the last `k` tokens.
#[derive(Debug)]
pub(crate) struct LookBack {
    slots: [Slot; MAX_NEGATION_WINDOW],
    window: usize,
    head: usize,
}

impl LookBack {
    pub(crate) fn new(window: usize) -> Self {
        Self {
            slots: [Slot::Other; MAX_NEGATION_WINDOW],
            window: window.min(MAX_NEGATION_WINDOW),
            head: 0,
        }
    }

    pub(crate) fn push(&mut self, slot: Slot) {
        if self.window == 0 {
            return;
        }
        self.slots[self.head] = slot;
        self.head = (self.head + 1) % self.window;
    }

    /// Count live negators in the window and mark them consumed.
    pub(crate) fn take_negations(&mut self) -> usize {
        let mut count = 0;
        for slot in &mut self.slots[..self.window] {
            if *slot == Slot::Negator {
                *slot = Slot::Other;
                count += 1;
            }
        }
        count
    }
}
