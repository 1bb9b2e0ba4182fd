//! Table header rendering for the members table.

use egui::Ui;
use egui_extras::TableRow;
use members_business::MemberField;

use crate::widgets::members::actions::TableAction;

/// Trailing header label after the member fields.
const ACTIONS_HEADER: &str = "Actions";

/// Renders the select-all checkbox followed by bold column labels.
///
/// `page_selected` is the derived checkbox state; toggling it pushes
/// [`TableAction::SelectAll`] with the new value.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    page_selected: bool,
    actions: &mut Vec<TableAction>,
) {
    header.col(|ui| {
        let mut checked = page_selected;
        if ui
            .checkbox(&mut checked, "")
            .on_hover_text("Select all rows on this page")
            .changed()
        {
            actions.push(TableAction::SelectAll(checked));
        }
    });

    for field in MemberField::ALL {
        header.col(|ui| {
            render_header_cell(ui, field.label());
        });
    }

    header.col(|ui| {
        render_header_cell(ui, ACTIONS_HEADER);
    });
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
