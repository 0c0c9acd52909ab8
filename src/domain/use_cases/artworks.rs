use tracing::{debug, info};

use crate::{
    entities::artwork::{Artwork, ArtworkQuery, CategoryFilter, NewArtworkRequest},
    errors::AppError,
    repositories::artwork::ArtworkRepository,
};

pub struct ArtworkHandler<R>
where
    R: ArtworkRepository,
{
    pub artwork_repo: R,
}

impl<R> ArtworkHandler<R>
where
    R: ArtworkRepository,
{
    pub fn new(artwork_repo: R) -> Self {
        ArtworkHandler { artwork_repo }
    }

    /// Lists the gallery, optionally narrowed to one category
    pub async fn list_artworks(&self, query: &ArtworkQuery) -> Result<Vec<Artwork>, AppError> {
        match query.category_filter() {
            CategoryFilter::All => self.artwork_repo.list_artworks(None).await,
            CategoryFilter::Only(category) => self.artwork_repo.list_artworks(Some(category)).await,
            CategoryFilter::Unknown => {
                debug!(category = ?query.category, "No artworks in unknown category");
                Ok(Vec::new())
            }
        }
    }

    /// Validates and stores a new artwork
    pub async fn create_artwork(&self, request: NewArtworkRequest) -> Result<Artwork, AppError> {
        let artwork = Artwork::try_from(request)?;

        self.artwork_repo.create_artwork(&artwork).await?;
        info!(id = %artwork.id, category = %artwork.category, "Artwork created");

        Ok(artwork)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::memory::InMemoryDocumentStore, repositories::document_repo::DocumentRepo};

    fn handler() -> ArtworkHandler<DocumentRepo> {
        ArtworkHandler::new(DocumentRepo::new(Arc::new(InMemoryDocumentStore::new())))
    }

    fn request(category: &str) -> NewArtworkRequest {
        NewArtworkRequest {
            title: "Eye Study".into(),
            category: category.into(),
            image_url: "https://images.example.com/eye.jpg".into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn category_filter_narrows_the_list() {
        let handler = handler();
        handler.create_artwork(request("sketches")).await.unwrap();
        handler.create_artwork(request("digital")).await.unwrap();

        let sketches = handler
            .list_artworks(&ArtworkQuery { category: Some("sketches".into()) })
            .await
            .unwrap();
        assert_eq!(sketches.len(), 1);

        let all = handler
            .list_artworks(&ArtworkQuery { category: Some("all".into()) })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let none = handler
            .list_artworks(&ArtworkQuery { category: Some("sculpture".into()) })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn invalid_artwork_is_not_stored() {
        let handler = handler();
        let err = handler.create_artwork(request("sculpture")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(handler.artwork_repo.count_artworks().await.unwrap(), 0);
    }
}
