//! Main panel for the member list.

use egui::{Response, RichText, TextEdit, Ui};
use members_business::{MemberTable, MemberTableInput, MembersFetchState};
use members_states::StateCtx;

use super::actions::{TableAction, dispatch_action};
use super::pagination::pagination_bar;
use super::table::members_table;

const SEARCH_HINT: &str = "Search by ID, name, email or role";

/// Displays the member list: toolbar, table of the current page and pagination bar.
///
/// Rendering only reads state. Actions collected during the frame are
/// dispatched after the table borrow ends.
pub fn members_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut actions = Vec::new();

    let response = ui.vertical(|ui| {
        ui.heading("Member List");
        fetch_status(state_ctx.state::<MembersFetchState>(), ui);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let label = ui.label("Search");
            let input = state_ctx.state_mut::<MemberTableInput>();
            let search = ui
                .add(
                    TextEdit::singleline(&mut input.query)
                        .id_salt("member_search")
                        .hint_text(SEARCH_HINT)
                        .desired_width(280.0),
                )
                .labelled_by(label.id);
            if search.changed() {
                actions.push(TableAction::Search);
            }

            let selected = state_ctx.state::<MemberTable>().selected_count();
            let delete_selected = ui
                .button("Delete Selected")
                .on_hover_text(format!("{selected} selected"));
            if delete_selected.clicked() {
                actions.push(TableAction::DeleteSelected);
            }
        });
        ui.add_space(8.0);

        let table = state_ctx.state::<MemberTable>();
        let table_height = (ui.available_height() - 40.0).max(120.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), table_height), |ui| {
            members_table(ui, table, &mut actions);
        });
        if table.filtered_len() == 0 && !state_ctx.state::<MembersFetchState>().is_loading() {
            ui.weak("No members found");
        }

        ui.add_space(8.0);
        pagination_bar(
            ui,
            table.current_page(),
            table.total_pages(),
            table.page_nav(),
            &mut actions,
        );
    });

    for action in actions {
        dispatch_action(state_ctx, action);
    }

    response.response
}

/// Muted one-line status of the member fetch. Nothing once members are in.
fn fetch_status(fetch: &MembersFetchState, ui: &mut Ui) {
    if fetch.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.weak("Loading members...");
        });
    } else if let Some(error) = fetch.error_message() {
        ui.label(RichText::new(format!("Could not load members: {error}")).weak());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use members_business::MemberField;

    #[test]
    fn test_search_hint_names_every_searched_field() {
        for field in MemberField::ALL {
            assert!(
                SEARCH_HINT.to_lowercase().contains(&field.label().to_lowercase()),
                "search hint should mention {}",
                field.label()
            );
        }
    }
}
