use crate::domain::card::{CatalogCard, ResolvedImage};
use crate::domain::error::AcquireError;
use crate::ports::outbound::image_api::ImageApi;

/// Looks the card up by exact name and set on the image API and downloads the
/// high resolution image. The file name comes from the image API's own id.
pub async fn resolve<IA: ImageApi + Send + Sync>(
    images: &IA,
    card: &CatalogCard,
) -> Result<ResolvedImage, AcquireError> {
    let Some(entry) = images.find_exact(&card.name, &card.set_code).await? else {
        return Err(AcquireError::ImageNotFound {
            name: card.name.clone(),
            set_code: card.set_code.clone(),
        });
    };

    let bytes = images.download(&entry.url).await?;
    if bytes.is_empty() {
        return Err(AcquireError::MissingImageData(card.name.clone()));
    }

    Ok(ResolvedImage {
        bytes,
        filename: format!("{}.png", entry.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::tests::create_test_card;
    use crate::ports::outbound::image_api::{ImageApiError, ImageEntry, MockImageApi};
    use mockall::predicate::*;

    fn create_test_entry() -> ImageEntry {
        ImageEntry {
            id: String::from("ce711943-c1a1-43a0-8b89-8d169cfb8e06"),
            url: String::from("https://cards.scryfall.io/png/front/c/e/ce711943.png"),
        }
    }

    #[tokio::test]
    async fn test_resolve() {
        let mut images = MockImageApi::new();
        images
            .expect_find_exact()
            .times(1)
            .with(eq("Lightning Bolt"), eq("LEA"))
            .returning(|_, _| Ok(Some(create_test_entry())));
        images
            .expect_download()
            .times(1)
            .with(eq("https://cards.scryfall.io/png/front/c/e/ce711943.png"))
            .returning(|_| Ok(vec![137, 80, 78, 71]));

        let image = resolve(&images, &create_test_card()).await.unwrap();

        assert_eq!(image.filename, "ce711943-c1a1-43a0-8b89-8d169cfb8e06.png");
        assert_eq!(image.bytes, vec![137, 80, 78, 71]);
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut images = MockImageApi::new();
        images.expect_find_exact().returning(|_, _| Ok(None));
        images.expect_download().times(0);

        let error = resolve(&images, &create_test_card()).await.unwrap_err();
        assert!(matches!(
            error,
            AcquireError::ImageNotFound { ref name, ref set_code }
                if name == "Lightning Bolt" && set_code == "LEA"
        ));
    }

    #[tokio::test]
    async fn test_resolve_empty_download() {
        let mut images = MockImageApi::new();
        images
            .expect_find_exact()
            .returning(|_, _| Ok(Some(create_test_entry())));
        images.expect_download().returning(|_| Ok(vec![]));

        let error = resolve(&images, &create_test_card()).await.unwrap_err();
        assert!(matches!(error, AcquireError::MissingImageData(_)));
    }

    #[tokio::test]
    async fn test_resolve_download_error() {
        let mut images = MockImageApi::new();
        images
            .expect_find_exact()
            .returning(|_, _| Ok(Some(create_test_entry())));
        images
            .expect_download()
            .returning(|_| Err(ImageApiError::new(String::from("timed out"))));

        let error = resolve(&images, &create_test_card()).await.unwrap_err();
        assert!(matches!(error, AcquireError::ImageApi(_)));
        assert!(error.is_retryable());
    }
}
