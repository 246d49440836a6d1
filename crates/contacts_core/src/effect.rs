use crate::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the text shown in the search field.
    SetFieldValue(String),
    /// Ask the router to navigate.
    Navigate { location: Location, mode: HistoryMode },
    /// Ask the repository for a blank contact, then open its edit form.
    CreateContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}
