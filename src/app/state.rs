use crate::catalog::models::BirdImage;

/// Everything the home screen renders. Published as a whole, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirdsUiState {
    pub categories: Vec<String>,
    pub selected_images: Vec<BirdImage>,
}

impl BirdsUiState {
    pub fn with_categories(&self, categories: Vec<String>) -> Self {
        Self {
            categories,
            selected_images: self.selected_images.clone(),
        }
    }

    pub fn with_selected_images(&self, selected_images: Vec<BirdImage>) -> Self {
        Self {
            categories: self.categories.clone(),
            selected_images,
        }
    }
}
