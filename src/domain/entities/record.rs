//! Capstone record entity.

/// A stored capstone project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub fields: RecordFields,
}

impl Record {
    /// Creates a new Record instance.
    pub fn new(id: i64, fields: RecordFields) -> Self {
        Self { id, fields }
    }
}

/// The writable columns of a record.
///
/// Used as-is for inserts and for full-replacement updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    pub role_of_contact: String,
    pub no_of_students: i32,
    pub acad_yr: String,
    pub capstone_title: String,
    pub company_name: String,
    pub company_contact: String,
    pub proj_desc: String,
}

/// Search criteria for records. `None` filters are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact academic year, e.g. `2023/2024`.
    pub acad_yr: Option<String>,
    /// Substring matched against name, title, company and description.
    pub keyword: Option<String>,
}

impl RecordFilter {
    /// Builds a filter, treating empty strings as absent.
    pub fn new(acad_yr: Option<String>, keyword: Option<String>) -> Self {
        Self {
            acad_yr: acad_yr.filter(|v| !v.trim().is_empty()),
            keyword: keyword.filter(|v| !v.trim().is_empty()),
        }
    }
}
