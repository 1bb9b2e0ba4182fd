//! Member list widgets.
//!
//! - `panel`: search box, bulk delete, table and pagination in one column
//! - `table`: the `TableBuilder` rendering of the current page
//! - `pagination`: First / Previous / Page x of y / Next / Last
//! - `actions`: what a frame's clicks and edits turn into
//!
//! Widgets only read `MemberTable`. Everything they want to change is collected
//! as a [`TableAction`](actions::TableAction) and dispatched after rendering.

mod actions;
mod pagination;
mod panel;
mod table;

pub use panel::members_panel;
