//! Cell rendering functions for the members table.

use egui::{Color32, RichText, TextEdit, Ui};
use members_business::{EditIssue, MemberField};

/// What a click in the actions cell asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowButton {
    Edit,
    Save,
    Cancel,
    Delete,
}

/// Renders the row selection checkbox. Returns `true` when it was toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

/// Renders a read-only field value.
#[inline]
pub fn render_text_cell(ui: &mut Ui, field: MemberField, value: &str) {
    match field {
        MemberField::Id => ui.label(RichText::new(value).monospace()),
        _ => ui.label(value),
    };
}

/// Renders an editable field of the draft.
///
/// Returns the new value when the user changed it this frame.
#[inline]
pub fn render_edit_cell(ui: &mut Ui, field: MemberField, value: &str) -> Option<String> {
    let mut text = value.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(("member_edit", field))
            .hint_text(field.label())
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(text)
}

/// Renders the row's action buttons: Edit and Delete, or Save and Cancel
/// while the row is under edit.
///
/// `issues` are shown as a warning marker next to Save; they never block it.
#[inline]
pub fn render_action_buttons(
    ui: &mut Ui,
    editing: bool,
    issues: &[EditIssue],
) -> Option<RowButton> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        if editing {
            if ui.button("Save").clicked() {
                clicked = Some(RowButton::Save);
            }
            if ui.button("Cancel").clicked() {
                clicked = Some(RowButton::Cancel);
            }
            if !issues.is_empty() {
                render_issue_marker(ui, issues);
            }
        } else {
            if ui.button("Edit").clicked() {
                clicked = Some(RowButton::Edit);
            }
            if ui
                .button(RichText::new("Delete").color(Color32::from_rgb(200, 60, 60)))
                .clicked()
            {
                clicked = Some(RowButton::Delete);
            }
        }
    });

    clicked
}

#[inline]
fn render_issue_marker(ui: &mut Ui, issues: &[EditIssue]) {
    let text = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    ui.label(RichText::new("⚠").color(Color32::from_rgb(255, 165, 0)))
        .on_hover_text(text);
}
