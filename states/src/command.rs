use std::any::Any;

use crate::{Dep, Updater};

/// An explicit, manually dispatched operation over registered states.
///
/// Commands run synchronously on the dispatching thread. Work that must not
/// block (network IO) is started from `run` and reports back through the
/// [`Updater`].
pub trait Command: Any {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
