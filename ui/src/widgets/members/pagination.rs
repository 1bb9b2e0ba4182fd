//! `First | Previous | Page x of y | Next | Last` navigation bar.

use egui::{Button, Ui};
use members_business::PageNav;

use super::actions::TableAction;

/// Renders the pagination bar. Buttons whose target page does not exist are disabled.
pub fn pagination_bar(
    ui: &mut Ui,
    current_page: usize,
    total_pages: usize,
    nav: PageNav,
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal(|ui| {
        nav_button(ui, "First", nav.first, actions);
        nav_button(ui, "Previous", nav.previous, actions);
        ui.label(page_label(current_page, total_pages));
        nav_button(ui, "Next", nav.next, actions);
        nav_button(ui, "Last", nav.last, actions);
    });
}

/// With no rows there are zero pages; the bar still reads "Page 1 of 0".
fn page_label(current_page: usize, total_pages: usize) -> String {
    format!("Page {current_page} of {total_pages}")
}

fn nav_button(ui: &mut Ui, label: &str, target: Option<usize>, actions: &mut Vec<TableAction>) {
    if ui.add_enabled(target.is_some(), Button::new(label)).clicked()
        && let Some(page) = target
    {
        actions.push(TableAction::ChangePage(page));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(2, 5), "Page 2 of 5");
        assert_eq!(page_label(1, 0), "Page 1 of 0");
    }
}
