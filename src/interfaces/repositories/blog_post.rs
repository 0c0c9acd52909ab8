use async_trait::async_trait;

use crate::{
    db::document_store::{Collection, Query},
    entities::blog_post::BlogPost,
    errors::AppError,
    repositories::document_repo::DocumentRepo,
};

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn create_blog_post(&self, post: &BlogPost) -> Result<(), AppError>;
    async fn insert_blog_posts(&self, posts: &[BlogPost]) -> Result<u64, AppError>;
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
}

#[async_trait]
impl BlogPostRepository for DocumentRepo {
    async fn create_blog_post(&self, post: &BlogPost) -> Result<(), AppError> {
        self.insert(Collection::Blog, post).await
    }

    async fn insert_blog_posts(&self, posts: &[BlogPost]) -> Result<u64, AppError> {
        self.insert_all(Collection::Blog, posts).await
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.find(Collection::Blog, &Query::all().newest_first("createdAt")).await
    }
}
