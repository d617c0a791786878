use crate::catalog::models::BirdImage;

pub fn image_url(base_url: &str, image: &BirdImage) -> String {
    format!("{base_url}{}", image.path)
}

pub fn alt_text(image: &BirdImage) -> String {
    format!("{} by {}", image.category, image.author)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::DEFAULT_API_BASE_URL;

    #[test]
    fn image_url_concatenates_base_and_path() {
        let image = BirdImage::new("sparrow", "sparrow/1.jpg", "jsmith");
        assert_eq!(
            image_url(DEFAULT_API_BASE_URL, &image),
            "https://sebastianaigner.github.io/demo-image-api/sparrow/1.jpg"
        );
    }

    #[test]
    fn alt_text_names_category_and_author() {
        let image = BirdImage::new("sparrow", "sparrow/1.jpg", "jsmith");
        assert_eq!(alt_text(&image), "sparrow by jsmith");
    }
}
