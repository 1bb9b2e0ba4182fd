//! Member table domain module.
//!
//! - `state`: the `MemberTable` controller stored in `StateCtx`
//! - `pagination`: page window and navigation targets
//! - `edit`: single-row edit buffer and advisory validation
//! - `commands`: the commands UI code dispatches instead of mutating the table
//!
//! UI code should only read `MemberTable` via `ctx.state::<MemberTable>()` and
//! trigger changes via `ctx.dispatch::<Cmd>()`.

pub mod commands;
pub mod edit;
pub mod pagination;
pub mod state;

pub use commands::{
    BeginEditCommand, CancelEditCommand, ChangePageCommand, DeleteMemberCommand,
    DeleteSelectedMembersCommand, MemberTableInput, SaveEditCommand, SearchMembersCommand,
    ToggleRowSelectionCommand, ToggleSelectAllCommand, UpdateEditBufferCommand,
};
pub use edit::{EditBuffer, EditIssue};
pub use pagination::{DEFAULT_PAGE_SIZE, PageNav, Pagination};
pub use state::MemberTable;
