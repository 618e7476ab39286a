//! Shared reversal flag for implicit edge reversal.
//!
//! A single flag is shared (via `Rc`) by a graph and every edge it stores.
//! Flipping it makes all of them present themselves as transposed at once,
//! without touching a single edge. The flag is deliberately `!Sync`: two
//! searches over the same flag from different threads are not supported,
//! and the compiler refuses to let that happen.

use std::cell::Cell;

/// Something that tells whether edges should currently be read as reversed.
pub trait ReversedProvider {
    fn is_reversed(&self) -> bool;
}

impl ReversedProvider for Cell<bool> {
    fn is_reversed(&self) -> bool {
        self.get()
    }
}

/// Settable reversal flag. Starts out not reversed.
#[derive(Default, Debug)]
pub struct ReversalSwitch {
    reversed: Cell<bool>,
}

impl ReversalSwitch {
    pub fn new() -> Self {
        ReversalSwitch::default()
    }

    pub fn set_reversed(&self, reversed: bool) {
        self.reversed.set(reversed);
    }

    /// Flips the flag, returns the new state.
    pub fn toggle(&self) -> bool {
        let reversed = !self.reversed.get();
        self.reversed.set(reversed);
        reversed
    }
}

impl ReversedProvider for ReversalSwitch {
    fn is_reversed(&self) -> bool {
        self.reversed.get()
    }
}

#[test]
fn test_switch_toggle() {
    let switch = ReversalSwitch::new();
    assert!(!switch.is_reversed());
    assert_eq!(switch.toggle(), true);
    assert!(switch.is_reversed());
    assert_eq!(switch.toggle(), false);
    switch.set_reversed(true);
    assert!(switch.is_reversed());
}
