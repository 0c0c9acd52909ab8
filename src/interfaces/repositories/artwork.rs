use async_trait::async_trait;

use crate::{
    db::document_store::{Collection, Query},
    entities::artwork::{Artwork, ArtworkCategory},
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait ArtworkRepository: Send + Sync {
    async fn create_artwork(&self, artwork: &Artwork) -> Result<(), AppError>;
    async fn insert_artworks(&self, artworks: &[Artwork]) -> Result<u64, AppError>;
    async fn list_artworks(&self, category: Option<ArtworkCategory>) -> Result<Vec<Artwork>, AppError>;
    async fn count_artworks(&self) -> Result<u64, AppError>;
}

#[async_trait]
impl ArtworkRepository for DocumentRepo {
    async fn create_artwork(&self, artwork: &Artwork) -> Result<(), AppError> {
        self.insert(Collection::Artworks, artwork).await
    }

    async fn insert_artworks(&self, artworks: &[Artwork]) -> Result<u64, AppError> {
        self.insert_all(Collection::Artworks, artworks).await
    }

    async fn list_artworks(&self, category: Option<ArtworkCategory>) -> Result<Vec<Artwork>, AppError> {
        let query = match category {
            Some(category) => Query::all().eq("category", category.as_str()),
            None => Query::all(),
        };
        self.find(Collection::Artworks, &query).await
    }

    async fn count_artworks(&self) -> Result<u64, AppError> {
        self.count(Collection::Artworks).await
    }
}
