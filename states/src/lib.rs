//! Minimal state container used by the members dashboard.
//!
//! - [`State`]: a typed value registered once in [`StateCtx`]
//! - [`Command`]: an explicit operation over states, run via [`StateCtx::dispatch`]
//! - [`Updater`]: how background work hands a replacement value back to the UI thread

mod command;
mod ctx;
mod dep;
mod error;
mod runtime;
mod state;

pub use command::Command;
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use runtime::{StateRuntime, Updater};
pub use state::{State, state_assign_impl};
