use std::any::{TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

pub(crate) type Storage = BTreeMap<TypeId, Box<dyn State>>;

/// Exclusive view over the registered states, handed to a running [`Command`](crate::Command).
pub struct Dep<'a> {
    inner: &'a mut Storage,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(inner: &'a mut Storage) -> Self {
        Self { inner }
    }

    pub fn try_state_ref<T: State>(&self) -> Result<&T, Error> {
        lookup(self.inner, "Dep::get_state_ref")
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn get_state_ref<T: State>(&self) -> &T {
        self.try_state_ref::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        lookup_mut(self.inner, "Dep::state_mut")
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }
}

pub(crate) fn lookup<'s, T: State>(storage: &'s Storage, context: &str) -> Result<&'s T, Error> {
    storage
        .get(&TypeId::of::<T>())
        .and_then(|state| state.as_any().downcast_ref::<T>())
        .ok_or_else(|| not_found::<T>(context))
}

pub(crate) fn lookup_mut<'s, T: State>(
    storage: &'s mut Storage,
    context: &str,
) -> Result<&'s mut T, Error> {
    storage
        .get_mut(&TypeId::of::<T>())
        .and_then(|state| state.as_any_mut().downcast_mut::<T>())
        .ok_or_else(|| not_found::<T>(context))
}

fn not_found<T: State>(context: &str) -> Error {
    Error::state_not_found(
        TypeId::of::<T>(),
        format!("{context}: {}", type_name::<T>()),
    )
}
