//! Row rendering for the members table.

use egui_extras::TableRow;
use members_business::{EditIssue, Member, MemberField};
use ustr::Ustr;

use super::cells::{
    RowButton, render_action_buttons, render_edit_cell, render_select_cell, render_text_cell,
};
use crate::widgets::members::actions::TableAction;

/// Data needed to render a member row.
pub struct MemberRowData<'a> {
    pub member: &'a Member,
    pub selected: bool,
    /// The edit draft when this row is under edit.
    pub draft: Option<&'a Member>,
    pub issues: &'a [EditIssue],
}

/// Renders a single member row, pushing whatever the user did onto `actions`.
///
/// The selected highlight is applied by the caller through `row.set_selected`.
#[inline]
pub fn render_member_row(
    row: &mut TableRow<'_, '_>,
    data: &MemberRowData<'_>,
    actions: &mut Vec<TableAction>,
) {
    let id = Ustr::from(&data.member.id);

    row.col(|ui| {
        if render_select_cell(ui, data.selected) {
            actions.push(TableAction::ToggleRow(id));
        }
    });

    for field in MemberField::ALL {
        row.col(|ui| match data.draft {
            Some(draft) => {
                if let Some(value) = render_edit_cell(ui, field, draft.field(field)) {
                    actions.push(TableAction::UpdateEdit(field, value));
                }
            }
            None => render_text_cell(ui, field, data.member.field(field)),
        });
    }

    row.col(|ui| {
        let action = match render_action_buttons(ui, data.draft.is_some(), data.issues) {
            Some(RowButton::Edit) => TableAction::BeginEdit(id),
            Some(RowButton::Save) => TableAction::SaveEdit,
            Some(RowButton::Cancel) => TableAction::CancelEdit,
            Some(RowButton::Delete) => TableAction::Delete(id),
            None => return,
        };
        actions.push(action);
    });
}
