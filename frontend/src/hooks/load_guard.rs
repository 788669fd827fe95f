use std::cell::Cell;
use std::rc::Rc;

/// One in-flight load.
///
/// Starting raises the loading flag. The flag drops again either when the load
/// finishes or when the effect that started it is cleaned up, whichever comes
/// first; a cancelled load never touches the flag afterwards.
#[derive(Clone)]
pub struct LoadGuard {
    stale: Rc<Cell<bool>>,
    set_loading: Rc<dyn Fn(bool)>,
}

impl LoadGuard {
    pub fn start(set_loading: impl Fn(bool) + 'static) -> Self {
        set_loading(true);
        Self {
            stale: Rc::new(Cell::new(false)),
            set_loading: Rc::new(set_loading),
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Called from the effect cleanup
    pub fn cancel(&self) {
        if !self.stale.replace(true) {
            (self.set_loading)(false);
        }
    }

    pub fn finish(&self) {
        if !self.is_stale() {
            (self.set_loading)(false);
        }
    }
}
