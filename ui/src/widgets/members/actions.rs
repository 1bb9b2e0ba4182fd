use members_business::{
    BeginEditCommand, CancelEditCommand, ChangePageCommand, DeleteMemberCommand,
    DeleteSelectedMembersCommand, MemberField, MemberTableInput, SaveEditCommand,
    SearchMembersCommand, ToggleRowSelectionCommand, ToggleSelectAllCommand,
    UpdateEditBufferCommand,
};
use members_states::StateCtx;
use ustr::Ustr;

/// A user intent collected while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// The search box changed; the query already sits in `MemberTableInput`.
    Search,
    ChangePage(usize),
    ToggleRow(Ustr),
    SelectAll(bool),
    BeginEdit(Ustr),
    UpdateEdit(MemberField, String),
    SaveEdit,
    CancelEdit,
    Delete(Ustr),
    DeleteSelected,
}

/// Set the command input for `action` and dispatch its command.
pub fn dispatch_action(state_ctx: &mut StateCtx, action: TableAction) {
    match action {
        TableAction::Search => {
            state_ctx.dispatch::<SearchMembersCommand>();
        }
        TableAction::ChangePage(page) => {
            state_ctx.update::<MemberTableInput>(|input| input.page = Some(page));
            state_ctx.dispatch::<ChangePageCommand>();
        }
        TableAction::ToggleRow(id) => {
            state_ctx.update::<MemberTableInput>(|input| input.member_id = Some(id));
            state_ctx.dispatch::<ToggleRowSelectionCommand>();
        }
        TableAction::SelectAll(checked) => {
            state_ctx.update::<MemberTableInput>(|input| input.select_all = Some(checked));
            state_ctx.dispatch::<ToggleSelectAllCommand>();
        }
        TableAction::BeginEdit(id) => {
            state_ctx.update::<MemberTableInput>(|input| input.member_id = Some(id));
            state_ctx.dispatch::<BeginEditCommand>();
        }
        TableAction::UpdateEdit(field, value) => {
            state_ctx.update::<MemberTableInput>(|input| input.edit = Some((field, value)));
            state_ctx.dispatch::<UpdateEditBufferCommand>();
        }
        TableAction::SaveEdit => {
            state_ctx.dispatch::<SaveEditCommand>();
        }
        TableAction::CancelEdit => {
            state_ctx.dispatch::<CancelEditCommand>();
        }
        TableAction::Delete(id) => {
            state_ctx.update::<MemberTableInput>(|input| input.member_id = Some(id));
            state_ctx.dispatch::<DeleteMemberCommand>();
        }
        TableAction::DeleteSelected => {
            state_ctx.dispatch::<DeleteSelectedMembersCommand>();
        }
    }
}
