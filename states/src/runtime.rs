use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::warn;

use crate::State;

type Update = (TypeId, Box<dyn Any + Send>);
type Notify = Arc<dyn Fn() + Send + Sync>;

/// Channel pair that carries state replacements from background work back to
/// the owning [`StateCtx`](crate::StateCtx).
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
    notify: Option<Notify>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRuntime")
            .field("pending", &self.recv.len())
            .field("notify", &self.notify.is_some())
            .finish()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            notify: None,
        }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
            notify: self.notify.clone(),
        }
    }

    /// Install a callback invoked after every [`Updater::set`], typically a repaint request.
    pub fn set_notify(&mut self, notify: impl Fn() + Send + Sync + 'static) {
        self.notify = Some(Arc::new(notify));
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }
}

/// Cloneable, `Send` handle used by background work to replace a state value.
///
/// Values are applied on the next [`StateCtx::sync_updates`](crate::StateCtx::sync_updates).
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    notify: Option<Notify>,
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("notify", &self.notify.is_some())
            .finish()
    }
}

impl Updater {
    pub fn set<T: State + Send>(&self, state: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(state)))
            .is_err()
        {
            warn!(
                "StateCtx dropped before update for {} arrived",
                type_name::<T>()
            );
            return;
        }
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}
