use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Idle,
    InFlight,
    Done,
    TornDown,
}

/// Single-flight guard tied to one view instance.
///
/// Clones share state, so the view can keep one handle for teardown while the
/// spawned fetch holds another.
#[derive(Clone, Debug)]
pub struct FetchGate {
    state: Rc<Cell<GateState>>,
}

impl Default for FetchGate {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchGate {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(GateState::Idle)),
        }
    }

    /// Claim the view's one fetch. `None` if it was already claimed or the
    /// view is gone.
    pub fn begin(&self) -> Option<FetchTicket> {
        match self.state.get() {
            GateState::Idle => {
                self.state.set(GateState::InFlight);
                Some(FetchTicket { gate: self.clone() })
            }
            _ => None,
        }
    }

    /// Mark the view as unmounted. Any pending ticket will discard its result.
    pub fn teardown(&self) {
        self.state.set(GateState::TornDown);
    }

    pub fn is_live(&self) -> bool {
        self.state.get() != GateState::TornDown
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.get() == GateState::InFlight
    }
}

/// Proof that the holder owns the in-flight fetch.
#[derive(Debug)]
#[must_use = "a ticket that is never completed leaves the gate in flight"]
pub struct FetchTicket {
    gate: FetchGate,
}

impl FetchTicket {
    /// Hand back the result if the view is still alive.
    pub fn complete<T>(self, value: T) -> Option<T> {
        if self.gate.is_live() {
            self.gate.state.set(GateState::Done);
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_while_in_flight() {
        let gate = FetchGate::new();
        let ticket = gate.begin();
        assert!(ticket.is_some());
        assert!(gate.is_in_flight());
        assert!(gate.begin().is_none());
    }

    #[test]
    fn completed_gate_does_not_refetch() {
        let gate = FetchGate::new();
        let ticket = gate.begin().unwrap();
        assert_eq!(ticket.complete(5), Some(5));
        assert!(!gate.is_in_flight());
        assert!(gate.begin().is_none());
    }

    #[test]
    fn result_after_teardown_is_discarded() {
        let gate = FetchGate::new();
        let view_handle = gate.clone();
        let ticket = gate.begin().unwrap();

        view_handle.teardown();

        assert!(!gate.is_live());
        assert_eq!(ticket.complete("late"), None);
    }

    #[test]
    fn teardown_before_begin_blocks_fetch() {
        let gate = FetchGate::new();
        gate.teardown();
        assert!(gate.begin().is_none());
    }
}
