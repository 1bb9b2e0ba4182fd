//! Table components for the member list.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Select-all checkbox and column labels
//! - `row`: Individual row rendering, read-only or under edit
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use members_business::MemberTable;

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{MemberRowData, render_member_row};
use crate::widgets::members::actions::TableAction;

/// Renders the current page of `table`.
pub fn members_table(ui: &mut Ui, table: &MemberTable, actions: &mut Vec<TableAction>) {
    let issues = table.edit_issues();
    let draft = table.edit_buffer();

    let mut builder = TableBuilder::new(ui)
        .id_salt("members_table")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, table.is_page_selected(), actions);
        })
        .body(|mut body| {
            for (index, member) in table.visible_entries() {
                let selected = table.is_selected(&member.id);
                let data = MemberRowData {
                    member,
                    selected,
                    draft: draft
                        .filter(|buffer| buffer.row() == index)
                        .map(|buffer| buffer.draft()),
                    issues: &issues,
                };
                body.row(ROW_HEIGHT, |mut row| {
                    row.set_selected(selected);
                    render_member_row(&mut row, &data, actions);
                });
            }
        });
}
