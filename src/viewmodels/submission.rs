use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct GuardInner {
    submitting: Cell<bool>,
    generation: Cell<u64>,
}

/// Un envío a la vez por pantalla. `cancel` invalida el envío en curso:
/// su respuesta se descarta al llegar.
#[derive(Clone, Default)]
pub struct SubmissionGuard {
    inner: Rc<GuardInner>,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` si ya hay un envío en curso
    pub fn begin(&self) -> Option<SubmissionTicket> {
        if self.inner.submitting.get() {
            return None;
        }
        self.inner.submitting.set(true);
        Some(SubmissionTicket {
            inner: self.inner.clone(),
            generation: self.inner.generation.get(),
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.submitting.get()
    }

    /// Al salir de la pantalla
    pub fn cancel(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        self.inner.submitting.set(false);
    }
}

/// Libera el guard al soltarse, pase lo que pase con el envío
pub struct SubmissionTicket {
    inner: Rc<GuardInner>,
    generation: u64,
}

impl SubmissionTicket {
    /// `false` si el envío fue cancelado mientras esperaba
    pub fn is_current(&self) -> bool {
        self.inner.generation.get() == self.generation
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        if self.is_current() {
            self.inner.submitting.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight_and_release_on_drop() {
        let guard = SubmissionGuard::new();
        let ticket = guard.begin().unwrap();
        assert!(guard.is_submitting());
        assert!(guard.begin().is_none());
        drop(ticket);
        assert!(!guard.is_submitting());
        assert!(guard.begin().is_some());
    }

    #[test]
    fn test_cancel_marks_ticket_stale() {
        let guard = SubmissionGuard::new();
        let stale = guard.begin().unwrap();
        guard.cancel();
        assert!(!stale.is_current());

        let fresh = guard.begin().unwrap();
        drop(stale);
        // El ticket viejo no libera el envío nuevo
        assert!(guard.is_submitting());
        assert!(fresh.is_current());
    }
}
