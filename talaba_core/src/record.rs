/// Column names every data source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "passport_id",
    "full_name",
    "faculty",
    "group_name",
    "group_link",
];

/// One row of the student directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Passport identifier, stored trimmed and upper-cased.
    pub identifier: String,
    pub full_name: String,
    pub faculty: String,
    pub group_name: String,
    /// Group invite link. Opaque, not validated.
    pub group_link: String,
}

impl StudentRecord {
    #[must_use]
    pub fn new(
        identifier: impl AsRef<str>,
        full_name: impl Into<String>,
        faculty: impl Into<String>,
        group_name: impl Into<String>,
        group_link: impl Into<String>,
    ) -> Self {
        Self {
            identifier: crate::normalize_identifier(identifier.as_ref()),
            full_name: full_name.into(),
            faculty: faculty.into(),
            group_name: group_name.into(),
            group_link: group_link.into(),
        }
    }
}
