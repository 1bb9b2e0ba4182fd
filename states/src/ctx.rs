use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::dep::{Storage, lookup, lookup_mut};
use crate::{Command, Dep, Error, State, StateRuntime, Updater};

/// Owner of every registered [`State`] and [`Command`].
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,
    states: Storage,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("runtime", &self.runtime)
            .field("states", &self.states.len())
            .field("commands", &self.commands.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    pub fn runtime(&self) -> &StateRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut StateRuntime {
        &mut self.runtime
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        lookup(&self.states, "StateCtx::state")
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        lookup_mut(&mut self.states, "StateCtx::state_mut")
    }

    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutate a state in place, usually to set command input before a dispatch.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn try_dispatch<C: Command>(&mut self) -> Result<(), Error> {
        let updater = self.runtime.updater();
        let command = self.commands.get(&TypeId::of::<C>()).ok_or_else(|| {
            Error::command_not_found(
                TypeId::of::<C>(),
                format!("StateCtx::dispatch: {}", type_name::<C>()),
            )
        })?;
        debug!("Dispatch {}", type_name::<C>());
        command.run(Dep::new(&mut self.states), updater);
        Ok(())
    }

    /// # Panics
    /// Panics if the command type is not registered.
    pub fn dispatch<C: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<C>() {
            panic!("{err}");
        }
    }

    /// Apply every value sent through an [`Updater`] since the last call.
    ///
    /// Returns the number of states replaced.
    pub fn sync_updates(&mut self) -> usize {
        let mut applied = 0;
        for (id, value) in self.runtime.drain() {
            match self.states.get_mut(&id) {
                Some(state) => {
                    state.assign_box(value);
                    applied += 1;
                }
                None => warn!("Dropped update for unregistered state {id:?}"),
            }
        }
        applied
    }
}
