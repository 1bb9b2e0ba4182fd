//! Member record as served by the data source.

use serde::{Deserialize, Serialize};

/// One row of the member list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Addressable column of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Id,
    Name,
    Email,
    Role,
}

impl MemberField {
    /// Columns in table order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Email, Self::Role];

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Id => &self.id,
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    pub fn field_mut(&mut self, field: MemberField) -> &mut String {
        match field {
            MemberField::Id => &mut self.id,
            MemberField::Name => &mut self.name,
            MemberField::Email => &mut self.email,
            MemberField::Role => &mut self.role,
        }
    }

    /// Whether any field contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        MemberField::ALL
            .iter()
            .any(|&field| self.field(field).to_lowercase().contains(needle))
    }
}
