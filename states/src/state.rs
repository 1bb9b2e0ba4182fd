use std::any::{Any, type_name};

use log::warn;

/// A value stored in [`StateCtx`](crate::StateCtx), addressed by its concrete type.
///
/// Only one value per type is kept; registering the same type twice replaces
/// the previous value.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value delivered through an [`Updater`](crate::Updater).
    ///
    /// States that never receive background updates can keep the default,
    /// which drops the value and logs a warning.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        drop(new_self);
        warn!("State does not accept background updates, value dropped");
    }
}

/// Helper for implementing [`State::assign_box`] on `Sized` states.
pub fn state_assign_impl<T: State>(this: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *this = *value,
        Err(_) => warn!(
            "Type mismatch while assigning background update to {}",
            type_name::<T>()
        ),
    }
}
