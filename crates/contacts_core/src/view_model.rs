/// Sidebar label for contacts without a first or last name.
pub const NO_NAME_LABEL: &str = "No Name";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Text the search field (`id=q`) should show.
    pub field_value: String,
    /// Drives the spinner next to the search field.
    pub is_searching: bool,
    /// Drives the dimmed detail pane for non-search navigations.
    pub is_detail_loading: bool,
    pub committed_query: Option<String>,
    pub location: String,
    pub contacts: Vec<ContactRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRowView {
    pub id: String,
    pub href: String,
    /// `None` renders as [`NO_NAME_LABEL`].
    pub label: Option<String>,
    pub favorite: bool,
    pub active: bool,
}

impl ContactRowView {
    pub fn label_or_placeholder(&self) -> &str {
        self.label.as_deref().unwrap_or(NO_NAME_LABEL)
    }
}
