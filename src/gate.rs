//! The load gate: a single switch between the splash view and the main
//! content tree, owned by the composition root and flipped exactly once by
//! the splash timeline's completion callback.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadGate {
    complete: bool,
}

impl LoadGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the main content tree may render. Until this is true the
    /// splash view is the only thing on screen; once true, the splash view
    /// is never remounted.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Flip the gate. Returns whether this call performed the transition;
    /// repeat calls are ignored.
    pub fn complete(&mut self) -> bool {
        if self.complete {
            log::warn!("load gate completed more than once; ignoring");
            return false;
        }
        self.complete = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert!(!LoadGate::new().is_complete());
    }

    #[test]
    fn completes_exactly_once() {
        let mut gate = LoadGate::new();
        assert!(gate.complete());
        assert!(gate.is_complete());
        assert!(!gate.complete(), "second completion must be a no-op");
        assert!(gate.is_complete());
    }
}
