//! Scratch copy of the member under edit.

use thiserror::Error;
use ustr::Ustr;

use crate::{Member, MemberField};

/// Advisory problems with an edit draft. Saving is never blocked by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditIssue {
    #[error("ID is empty")]
    EmptyId,
    #[error("Name is empty")]
    EmptyName,
    #[error("Email has no '@'")]
    InvalidEmail,
    #[error("ID is already used by another member")]
    DuplicateId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    /// Index of the edited member in the working set.
    pub(crate) row: usize,
    original_id: Ustr,
    draft: Member,
}

impl EditBuffer {
    pub(crate) fn new(row: usize, member: &Member) -> Self {
        Self {
            row,
            original_id: Ustr::from(&member.id),
            draft: member.clone(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// ID the member had when editing started.
    pub fn original_id(&self) -> Ustr {
        self.original_id
    }

    pub fn draft(&self) -> &Member {
        &self.draft
    }

    pub(crate) fn into_draft(self) -> Member {
        self.draft
    }

    pub fn set(&mut self, field: MemberField, value: impl Into<String>) {
        *self.draft.field_mut(field) = value.into();
    }

    /// Check the draft against the rest of the working set.
    pub fn issues(&self, members: &[Member]) -> Vec<EditIssue> {
        let mut issues = Vec::new();
        if self.draft.id.trim().is_empty() {
            issues.push(EditIssue::EmptyId);
        } else if members
            .iter()
            .enumerate()
            .any(|(i, m)| i != self.row && m.id == self.draft.id)
        {
            issues.push(EditIssue::DuplicateId);
        }
        if self.draft.name.trim().is_empty() {
            issues.push(EditIssue::EmptyName);
        }
        if !self.draft.email.contains('@') {
            issues.push(EditIssue::InvalidEmail);
        }
        issues
    }
}
