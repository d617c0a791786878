use std::collections::HashSet;

use crate::catalog::error::SourceError;
use crate::catalog::models::BirdImage;

pub const PICTURES_ENDPOINT: &str = "pictures.json";

pub fn parse_pictures(body: &str) -> Result<Vec<BirdImage>, SourceError> {
    Ok(serde_json::from_str(body)?)
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(images: &[BirdImage]) -> Vec<String> {
    let mut seen = HashSet::new();
    images
        .iter()
        .filter(|image| seen.insert(image.category.as_str()))
        .map(|image| image.category.clone())
        .collect()
}

pub fn images_in_category(images: Vec<BirdImage>, category: &str) -> Vec<BirdImage> {
    images
        .into_iter()
        .filter(|image| image.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"category": "pigeon", "path": "pigeon/1.jpg", "author": "alice"},
        {"category": "sparrow", "path": "sparrow/1.jpg", "author": "jsmith"},
        {"category": "pigeon", "path": "pigeon/2.jpg", "author": "bob"},
        {"category": "owl", "path": "owl/1.jpg", "author": "carol"},
        {"category": "sparrow", "path": "sparrow/2.jpg", "author": "dave"}
    ]"#;

    #[test]
    fn parse_pictures_reads_api_payload() {
        let images = parse_pictures(SAMPLE).expect("parse sample");
        assert_eq!(images.len(), 5);
        assert_eq!(images[1], BirdImage::new("sparrow", "sparrow/1.jpg", "jsmith"));
    }

    #[test]
    fn parse_pictures_rejects_malformed_body() {
        let result = parse_pictures(r#"{"category": "owl"}"#);
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[test]
    fn categories_keep_first_appearance_order_without_duplicates() {
        let images = parse_pictures(SAMPLE).expect("parse sample");
        assert_eq!(
            distinct_categories(&images),
            vec!["pigeon".to_string(), "sparrow".to_string(), "owl".to_string()]
        );
    }

    #[test]
    fn images_in_category_filters_and_keeps_order() {
        let images = parse_pictures(SAMPLE).expect("parse sample");
        let sparrows = images_in_category(images, "sparrow");
        let paths: Vec<&str> = sparrows.iter().map(|image| image.path.as_str()).collect();
        assert_eq!(paths, vec!["sparrow/1.jpg", "sparrow/2.jpg"]);
        assert!(sparrows.iter().all(|image| image.category == "sparrow"));
    }

    #[test]
    fn unknown_category_yields_no_images() {
        let images = parse_pictures(SAMPLE).expect("parse sample");
        assert!(images_in_category(images, "albatross").is_empty());
    }
}
