//! Member table controller.
//!
//! Owns the working set of members and everything the table view derives
//! from it: the search filter, the page window, the row selection and the
//! single-row edit buffer.
//!
//! The working set is the only copy of the data. Deletes and saved edits
//! apply to it directly, so clearing the search never brings back a deleted
//! row or an old value. The filtered set is kept as indices into the working
//! set and rebuilt on search.

use std::any::Any;
use std::collections::HashSet;

use log::debug;
use members_states::State;
use ustr::Ustr;

use super::edit::{EditBuffer, EditIssue};
use super::pagination::{PageNav, Pagination};
use crate::{Member, MemberField};

#[derive(Debug, Default)]
pub struct MemberTable {
    /// Working set.
    members: Vec<Member>,

    /// Indices into `members` that match `query`, in working set order.
    filtered: Vec<usize>,

    /// Current search text as typed.
    query: String,

    pagination: Pagination,

    /// Selected member ids. Only ids present in the filtered set are kept.
    selected: HashSet<Ustr>,

    edit: Option<EditBuffer>,
}

impl State for MemberTable {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl MemberTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    /// Replace the working set, clearing search, selection and edit state.
    pub fn initialize(&mut self, members: Vec<Member>) {
        self.filtered = (0..members.len()).collect();
        self.members = members;
        self.query.clear();
        self.selected.clear();
        self.edit = None;
        self.pagination.reset(self.filtered.len());
    }

    /// Filter the working set by `query` across every field, ignoring case.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.refilter();
        self.pagination.reset(self.filtered.len());
        self.prune_selection();

        if let Some(buffer) = &self.edit
            && !self.filtered.contains(&buffer.row)
        {
            debug!("Edited member left the filtered set, dropping edit buffer");
            self.edit = None;
        }
    }

    pub fn change_page(&mut self, page: usize) {
        self.pagination.change_page(page);
    }

    /// Members on the current page.
    pub fn visible_rows(&self) -> Vec<&Member> {
        self.visible_entries().map(|(_, member)| member).collect()
    }

    /// Members on the current page with their working set index.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &Member)> + '_ {
        let range = self.pagination.range(self.filtered.len());
        self.filtered[range]
            .iter()
            .map(|&index| (index, &self.members[index]))
    }

    /// Remove the filtered member(s) with `id`. Returns how many were removed.
    pub fn delete_one(&mut self, id: &str) -> usize {
        let removed = self.remove_filtered_where(|member| member.id == id);
        if let Some(id) = Ustr::from_existing(id) {
            self.selected.remove(&id);
        }
        self.pagination.reset(self.filtered.len());
        removed
    }

    /// Remove every filtered member whose id is selected and clear the selection.
    pub fn delete_selected(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected);
        let removed = self.remove_filtered_where(|member| {
            Ustr::from_existing(&member.id).is_some_and(|id| selected.contains(&id))
        });
        self.pagination.reset(self.filtered.len());
        removed
    }

    /// Start editing the first filtered member with `id`, abandoning any
    /// active edit. Returns `false` when no such member is visible to the filter.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(row) = self
            .filtered
            .iter()
            .copied()
            .find(|&index| self.members[index].id == id)
        else {
            return false;
        };
        if self.edit.is_some() {
            debug!("Abandoning active edit to edit member {id}");
        }
        self.edit = Some(EditBuffer::new(row, &self.members[row]));
        true
    }

    pub fn update_edit_buffer(&mut self, field: MemberField, value: impl Into<String>) {
        if let Some(buffer) = &mut self.edit {
            buffer.set(field, value);
        }
    }

    /// Write the edit buffer into the working set. Returns `false` when no
    /// edit was active.
    pub fn save_edit(&mut self) -> bool {
        let Some(buffer) = self.edit.take() else {
            return false;
        };
        let row = buffer.row();
        let original_id = buffer.original_id();
        let draft = buffer.into_draft();

        if draft.id != original_id.as_str() && self.selected.remove(&original_id) {
            self.selected.insert(Ustr::from(&draft.id));
        }

        match self.members.get_mut(row) {
            Some(member) => {
                *member = draft;
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Select or unselect `id`. Ids outside the filtered set are never selected.
    pub fn toggle_row_selection(&mut self, id: Ustr) {
        if self.selected.remove(&id) {
            return;
        }
        if self.filtered().any(|member| member.id == id.as_str()) {
            self.selected.insert(id);
        } else {
            debug!("Ignoring selection of member {id} outside the filtered set");
        }
    }

    /// Checked selects exactly the current page; unchecked clears every selection.
    pub fn toggle_select_all(&mut self, checked: bool) {
        let page: HashSet<Ustr> = if checked {
            self.visible_entries()
                .map(|(_, member)| Ustr::from(&member.id))
                .collect()
        } else {
            HashSet::new()
        };
        self.selected = page;
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Member> + '_ {
        self.filtered.iter().map(|&index| &self.members[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    pub fn page_nav(&self) -> PageNav {
        self.pagination.nav()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        Ustr::from_existing(id).is_some_and(|id| self.selected.contains(&id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Selected ids, sorted.
    pub fn selected_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.selected.iter().map(Ustr::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// State of the header checkbox: every row of a non-empty page is selected.
    pub fn is_page_selected(&self) -> bool {
        let mut rows = self.visible_entries().peekable();
        rows.peek().is_some() && rows.all(|(_, member)| self.is_selected(&member.id))
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    pub fn is_editing_row(&self, row: usize) -> bool {
        self.edit.as_ref().is_some_and(|buffer| buffer.row() == row)
    }

    pub fn edit_issues(&self) -> Vec<EditIssue> {
        self.edit
            .as_ref()
            .map(|buffer| buffer.issues(&self.members))
            .unwrap_or_default()
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.matches_lowercase(&needle))
            .map(|(index, _)| index)
            .collect();
    }

    /// Drop selected ids that no longer appear in the filtered set.
    fn prune_selection(&mut self) {
        let present: HashSet<&str> = self
            .filtered
            .iter()
            .map(|&index| self.members[index].id.as_str())
            .collect();
        self.selected.retain(|id| present.contains(id.as_str()));
    }

    /// Remove filtered members matching `doomed` from the working set,
    /// remapping the filtered indices and the edit buffer.
    fn remove_filtered_where(&mut self, doomed: impl Fn(&Member) -> bool) -> usize {
        let mut remove = vec![false; self.members.len()];
        let mut removed = 0;
        for &index in &self.filtered {
            if doomed(&self.members[index]) {
                remove[index] = true;
                removed += 1;
            }
        }
        if removed == 0 {
            return 0;
        }

        let mut remap = vec![None; self.members.len()];
        let mut kept = Vec::with_capacity(self.members.len() - removed);
        for (index, member) in std::mem::take(&mut self.members).into_iter().enumerate() {
            if !remove[index] {
                remap[index] = Some(kept.len());
                kept.push(member);
            }
        }
        self.members = kept;
        self.filtered = self
            .filtered
            .iter()
            .filter_map(|&index| remap[index])
            .collect();
        self.edit = self.edit.take().and_then(|mut buffer| {
            let row = remap[buffer.row]?;
            buffer.row = row;
            Some(buffer)
        });
        self.prune_selection();

        debug!("Removed {removed} member(s), {} left", self.members.len());
        removed
    }
}
