//! Domain layer for the members dashboard: the member model, the table
//! controller and its commands, the data source fetch and configuration.

mod config;
mod fetch_members;
mod member;
pub mod table;

pub use config::{BusinessConfig, DEFAULT_MEMBERS_URL};
pub use fetch_members::{
    ApplyFetchedMembersCommand, FetchError, FetchMembersCommand, FetchMembersResult,
    MembersFetchState, decode_members,
};
pub use member::{Member, MemberField};
pub use table::{
    BeginEditCommand, CancelEditCommand, ChangePageCommand, DeleteMemberCommand,
    DeleteSelectedMembersCommand, EditBuffer, EditIssue, MemberTable, MemberTableInput, PageNav,
    Pagination, SaveEditCommand, SearchMembersCommand, ToggleRowSelectionCommand,
    ToggleSelectAllCommand, UpdateEditBufferCommand,
};

use members_states::StateCtx;

/// Register every business state and command on `ctx`.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(MemberTable::new(config.page_size));
    ctx.add_state(config);
    ctx.add_state(MemberTableInput::default());
    ctx.add_state(MembersFetchState::default());

    ctx.record_command(FetchMembersCommand);
    ctx.record_command(ApplyFetchedMembersCommand);
    ctx.record_command(SearchMembersCommand);
    ctx.record_command(ChangePageCommand);
    ctx.record_command(DeleteMemberCommand);
    ctx.record_command(DeleteSelectedMembersCommand);
    ctx.record_command(BeginEditCommand);
    ctx.record_command(UpdateEditBufferCommand);
    ctx.record_command(SaveEditCommand);
    ctx.record_command(CancelEditCommand);
    ctx.record_command(ToggleRowSelectionCommand);
    ctx.record_command(ToggleSelectAllCommand);
}
