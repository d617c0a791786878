#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    RefreshCategories,
    SelectCategory(String),
}
