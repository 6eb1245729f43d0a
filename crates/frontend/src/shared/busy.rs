//! Busy flag for trigger buttons.
//!
//! A [`BusyGuard`] marks its flag busy on creation and idle on drop, so the
//! trigger is re-enabled exactly once whichever way the workflow exits.

/// Something that can show an in-flight state, usually a button's `disabled`.
pub trait BusyFlag {
    fn set_busy(&self, busy: bool);
}

#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct BusyGuard<'a, F: BusyFlag + ?Sized> {
    flag: &'a F,
}

impl<'a, F: BusyFlag + ?Sized> BusyGuard<'a, F> {
    pub fn engage(flag: &'a F) -> Self {
        flag.set_busy(true);
        Self { flag }
    }
}

impl<F: BusyFlag + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}
