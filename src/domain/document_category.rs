/// Category a document is filed under, e.g. `balance-sheet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCategory {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub required: bool,
}

/// Category assigned to uploads that arrive without an explicit one.
pub const DEFAULT_CATEGORY_ID: &str = "balance-sheet";
