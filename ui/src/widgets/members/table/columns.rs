//! Column definitions for the members table.

use egui_extras::Column;

pub const SELECT_WIDTH: f32 = 28.0;
pub const ID_WIDTH: f32 = 70.0;
pub const ROLE_WIDTH: f32 = 110.0;
pub const ACTIONS_WIDTH: f32 = 150.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in order:
/// select checkbox, ID, Name, Email, Role, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(SELECT_WIDTH),                       // Select
        Column::exact(ID_WIDTH),                           // ID
        Column::initial(180.0).at_least(100.0).clip(true), // Name
        Column::remainder().at_least(160.0).clip(true),    // Email - flexible
        Column::exact(ROLE_WIDTH),                         // Role
        Column::exact(ACTIONS_WIDTH),                      // Actions
    ]
}
