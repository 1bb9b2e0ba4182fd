//! Fetch members command + fetch state.
//!
//! Fetching is a side effect (network IO), so it lives in an explicitly
//! dispatched command rather than anywhere implicit:
//! - `MembersFetchState`: where the request stands, and the received list until applied
//! - `FetchMembersCommand`: issues the single GET to `BusinessConfig::members_url`
//! - `ApplyFetchedMembersCommand`: moves a received list into `MemberTable`
//!
//! ## How to use
//! 1) Register once during app setup:
//!    - `ctx.add_state(MembersFetchState::default());`
//!    - `ctx.record_command(FetchMembersCommand);`
//!    - `ctx.record_command(ApplyFetchedMembersCommand);`
//!
//! 2) Dispatch `FetchMembersCommand` at startup. Each frame, call
//!    `ctx.sync_updates()` then dispatch `ApplyFetchedMembersCommand`.
//!
//! The request is fired at most once per session. A failure is logged and
//! leaves the table empty.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use members_states::{Command, Dep, State, Updater, state_assign_impl};
use thiserror::Error;

use crate::{BusinessConfig, Member, MemberTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Data source returned status: {0}")]
    Status(u16),
    #[error("Failed to parse member list: {0}")]
    Decode(String),
}

/// Decode a data source response into members.
///
/// Any non-2xx status is a failure, whatever the body holds.
pub fn decode_members(ok: bool, status: u16, body: &[u8]) -> Result<Vec<Member>, FetchError> {
    if !ok {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Result of fetching the member list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchMembersResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Members arrived and wait for `ApplyFetchedMembersCommand`.
    Received(Vec<Member>),
    /// Members were handed to the table.
    Loaded { count: usize },
    /// Fetch failed with an error message. Terminal for the session.
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct MembersFetchState {
    pub result: FetchMembersResult,
    /// When the request completed, successfully or not.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl MembersFetchState {
    pub fn is_idle(&self) -> bool {
        matches!(self.result, FetchMembersResult::Idle)
    }

    /// Loading until the members reach the table.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.result,
            FetchMembersResult::Loading | FetchMembersResult::Received(_)
        )
    }

    pub fn loaded_count(&self) -> Option<usize> {
        match self.result {
            FetchMembersResult::Loaded { count } => Some(count),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            FetchMembersResult::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl State for MembersFetchState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Manual-only command that fetches the member list.
///
/// Dispatch explicitly via `ctx.dispatch::<FetchMembersCommand>()`.
#[derive(Default, Debug)]
pub struct FetchMembersCommand;

impl Command for FetchMembersCommand {
    fn run(&self, mut deps: Dep<'_>, updater: Updater) {
        let url = deps.get_state_ref::<BusinessConfig>().members_url.clone();

        let state = deps.state_mut::<MembersFetchState>();
        if !state.is_idle() {
            warn!("FetchMembersCommand: members already requested, ignoring");
            return;
        }
        // Mark loading synchronously so a second dispatch before the next sync is ignored.
        state.result = FetchMembersResult::Loading;

        info!("FetchMembersCommand: Fetching members from {url}");
        let request = ehttp::Request::get(&url);

        ehttp::fetch(request, move |result| {
            let fetched_at = Some(Utc::now());
            let outcome = result.map_err(FetchError::Transport).and_then(|response| {
                decode_members(response.ok, response.status, &response.bytes)
            });
            match outcome {
                Ok(members) => {
                    info!(
                        "FetchMembersCommand: Fetched {} members successfully",
                        members.len()
                    );
                    updater.set(MembersFetchState {
                        result: FetchMembersResult::Received(members),
                        fetched_at,
                    });
                }
                Err(err) => {
                    error!("FetchMembersCommand: {err}");
                    updater.set(MembersFetchState {
                        result: FetchMembersResult::Failed(err.to_string()),
                        fetched_at,
                    });
                }
            }
        });
    }
}

/// Hand a received member list to `MemberTable`. No-op in every other fetch state,
/// so it is safe to dispatch every frame.
#[derive(Default, Debug)]
pub struct ApplyFetchedMembersCommand;

impl Command for ApplyFetchedMembersCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let state = deps.state_mut::<MembersFetchState>();
        let members = match std::mem::take(&mut state.result) {
            FetchMembersResult::Received(members) => members,
            other => {
                state.result = other;
                return;
            }
        };
        state.result = FetchMembersResult::Loaded {
            count: members.len(),
        };

        deps.state_mut::<MemberTable>().initialize(members);
    }
}
