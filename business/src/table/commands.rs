//! Commands over the member table.
//!
//! UI code follows the pattern:
//! - set arguments via `ctx.update::<MemberTableInput>(...)`
//! - dispatch via `ctx.dispatch::<Command>()`
//! - read back via `ctx.state::<MemberTable>()`

use std::any::Any;

use log::{debug, warn};
use members_states::{Command, Dep, State, Updater};
use ustr::Ustr;

use super::state::MemberTable;
use crate::MemberField;

/// Arguments for the member table commands.
#[derive(Debug, Clone, Default)]
pub struct MemberTableInput {
    /// Search text (for `SearchMembersCommand`).
    pub query: String,

    /// Target page (for `ChangePageCommand`).
    pub page: Option<usize>,

    /// Member id (for `DeleteMemberCommand`, `BeginEditCommand`, `ToggleRowSelectionCommand`).
    pub member_id: Option<Ustr>,

    /// Field and value (for `UpdateEditBufferCommand`).
    pub edit: Option<(MemberField, String)>,

    /// Header checkbox value (for `ToggleSelectAllCommand`).
    pub select_all: Option<bool>,
}

impl State for MemberTableInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl MemberTableInput {
    fn member_id(&self, command: &str) -> Option<Ustr> {
        if self.member_id.is_none() {
            warn!("{command}: no member_id set, ignoring");
        }
        self.member_id
    }
}

#[derive(Debug, Default)]
pub struct SearchMembersCommand;

impl Command for SearchMembersCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let query = deps.get_state_ref::<MemberTableInput>().query.clone();
        let table = deps.state_mut::<MemberTable>();
        table.search(&query);
        debug!(
            "SearchMembersCommand: {query:?} matched {} member(s)",
            table.filtered_len()
        );
    }
}

#[derive(Debug, Default)]
pub struct ChangePageCommand;

impl Command for ChangePageCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(page) = deps.get_state_ref::<MemberTableInput>().page else {
            warn!("ChangePageCommand: no page set, ignoring");
            return;
        };
        deps.state_mut::<MemberTable>().change_page(page);
    }
}

#[derive(Debug, Default)]
pub struct DeleteMemberCommand;

impl Command for DeleteMemberCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps
            .get_state_ref::<MemberTableInput>()
            .member_id("DeleteMemberCommand")
        else {
            return;
        };
        let removed = deps.state_mut::<MemberTable>().delete_one(id.as_str());
        debug!("DeleteMemberCommand: removed {removed} member(s) with id {id}");
    }
}

#[derive(Debug, Default)]
pub struct DeleteSelectedMembersCommand;

impl Command for DeleteSelectedMembersCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let removed = deps.state_mut::<MemberTable>().delete_selected();
        debug!("DeleteSelectedMembersCommand: removed {removed} member(s)");
    }
}

#[derive(Debug, Default)]
pub struct BeginEditCommand;

impl Command for BeginEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps
            .get_state_ref::<MemberTableInput>()
            .member_id("BeginEditCommand")
        else {
            return;
        };
        if !deps.state_mut::<MemberTable>().begin_edit(id.as_str()) {
            warn!("BeginEditCommand: no filtered member with id {id}");
        }
    }
}

#[derive(Debug, Default)]
pub struct UpdateEditBufferCommand;

impl Command for UpdateEditBufferCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some((field, value)) = deps.get_state_ref::<MemberTableInput>().edit.clone() else {
            warn!("UpdateEditBufferCommand: no edit set, ignoring");
            return;
        };
        deps.state_mut::<MemberTable>()
            .update_edit_buffer(field, value);
    }
}

#[derive(Debug, Default)]
pub struct SaveEditCommand;

impl Command for SaveEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let table = deps.state_mut::<MemberTable>();
        let issues = table.edit_issues();
        if !issues.is_empty() {
            debug!("SaveEditCommand: saving with {} advisory issue(s)", issues.len());
        }
        if !table.save_edit() {
            warn!("SaveEditCommand: no active edit");
        }
    }
}

#[derive(Debug, Default)]
pub struct CancelEditCommand;

impl Command for CancelEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        deps.state_mut::<MemberTable>().cancel_edit();
    }
}

#[derive(Debug, Default)]
pub struct ToggleRowSelectionCommand;

impl Command for ToggleRowSelectionCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(id) = deps
            .get_state_ref::<MemberTableInput>()
            .member_id("ToggleRowSelectionCommand")
        else {
            return;
        };
        deps.state_mut::<MemberTable>().toggle_row_selection(id);
    }
}

#[derive(Debug, Default)]
pub struct ToggleSelectAllCommand;

impl Command for ToggleSelectAllCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater) {
        let Some(checked) = deps.get_state_ref::<MemberTableInput>().select_all else {
            warn!("ToggleSelectAllCommand: no select_all set, ignoring");
            return;
        };
        deps.state_mut::<MemberTable>().toggle_select_all(checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Member;
    use members_states::StateCtx;

    /// Helper to create a StateCtx with all table states and commands registered.
    fn setup_ctx(count: usize) -> StateCtx {
        let mut ctx = StateCtx::new();
        let mut table = MemberTable::new(10);
        table.initialize(
            (1..=count)
                .map(|i| {
                    Member::new(
                        i.to_string(),
                        format!("Member {i}"),
                        format!("m{i}@x.com"),
                        if i == 1 { "admin" } else { "member" },
                    )
                })
                .collect(),
        );
        ctx.add_state(table);
        ctx.add_state(MemberTableInput::default());
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
        ctx
    }

    #[test]
    fn test_search_command() {
        let mut ctx = setup_ctx(3);

        ctx.update::<MemberTableInput>(|input| input.query = "ADMIN".to_string());
        ctx.dispatch::<SearchMembersCommand>();

        let table = ctx.state::<MemberTable>();
        assert_eq!(table.filtered_len(), 1);
        assert_eq!(table.query(), "ADMIN");
    }

    #[test]
    fn test_change_page_command() {
        let mut ctx = setup_ctx(25);

        ctx.update::<MemberTableInput>(|input| input.page = Some(3));
        ctx.dispatch::<ChangePageCommand>();

        assert_eq!(ctx.state::<MemberTable>().visible_rows().len(), 5);
    }

    #[test]
    fn test_commands_without_input_are_noops() {
        let mut ctx = setup_ctx(25);

        ctx.dispatch::<ChangePageCommand>();
        ctx.dispatch::<DeleteMemberCommand>();
        ctx.dispatch::<BeginEditCommand>();
        ctx.dispatch::<UpdateEditBufferCommand>();
        ctx.dispatch::<ToggleRowSelectionCommand>();
        ctx.dispatch::<ToggleSelectAllCommand>();
        ctx.dispatch::<SaveEditCommand>();

        let table = ctx.state::<MemberTable>();
        assert_eq!(table.filtered_len(), 25);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.selected_count(), 0);
        assert!(table.edit_buffer().is_none());
    }

    #[test]
    fn test_select_and_delete_commands() {
        let mut ctx = setup_ctx(3);

        ctx.update::<MemberTableInput>(|input| input.member_id = Some(Ustr::from("2")));
        ctx.dispatch::<ToggleRowSelectionCommand>();
        assert!(ctx.state::<MemberTable>().is_selected("2"));

        ctx.dispatch::<DeleteSelectedMembersCommand>();

        let table = ctx.state::<MemberTable>();
        assert!(table.filtered().all(|m| m.id != "2"));
        assert_eq!(table.selected_count(), 0);
    }

    #[test]
    fn test_delete_one_command() {
        let mut ctx = setup_ctx(3);

        ctx.update::<MemberTableInput>(|input| input.member_id = Some(Ustr::from("3")));
        ctx.dispatch::<DeleteMemberCommand>();

        assert_eq!(ctx.state::<MemberTable>().filtered_len(), 2);
    }

    #[test]
    fn test_select_all_command() {
        let mut ctx = setup_ctx(25);

        ctx.update::<MemberTableInput>(|input| input.select_all = Some(true));
        ctx.dispatch::<ToggleSelectAllCommand>();
        assert_eq!(ctx.state::<MemberTable>().selected_count(), 10);

        ctx.update::<MemberTableInput>(|input| input.select_all = Some(false));
        ctx.dispatch::<ToggleSelectAllCommand>();
        assert_eq!(ctx.state::<MemberTable>().selected_count(), 0);
    }

    #[test]
    fn test_edit_save_flow() {
        let mut ctx = setup_ctx(3);

        ctx.update::<MemberTableInput>(|input| input.member_id = Some(Ustr::from("2")));
        ctx.dispatch::<BeginEditCommand>();
        ctx.update::<MemberTableInput>(|input| {
            input.edit = Some((MemberField::Name, "Renamed".to_string()));
        });
        ctx.dispatch::<UpdateEditBufferCommand>();
        ctx.dispatch::<SaveEditCommand>();

        let table = ctx.state::<MemberTable>();
        assert_eq!(table.members()[1].name, "Renamed");
        assert!(table.edit_buffer().is_none());
    }

    #[test]
    fn test_edit_cancel_flow() {
        let mut ctx = setup_ctx(3);

        ctx.update::<MemberTableInput>(|input| input.member_id = Some(Ustr::from("2")));
        ctx.dispatch::<BeginEditCommand>();
        ctx.update::<MemberTableInput>(|input| {
            input.edit = Some((MemberField::Role, "admin".to_string()));
        });
        ctx.dispatch::<UpdateEditBufferCommand>();
        ctx.dispatch::<CancelEditCommand>();

        let table = ctx.state::<MemberTable>();
        assert_eq!(table.members()[1].role, "member");
        assert!(table.edit_buffer().is_none());
    }
}
