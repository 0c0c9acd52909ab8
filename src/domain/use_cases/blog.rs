use tracing::info;

use crate::{
    entities::blog_post::{BlogPost, NewBlogPostRequest},
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
};

pub struct BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub blog_post_repo: R,
}

impl<R> BlogPostHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(blog_post_repo: R) -> Self {
        BlogPostHandler { blog_post_repo }
    }

    /// Creates a new blog post with the provided data
    pub async fn create_blog_post(&self, request: NewBlogPostRequest) -> Result<BlogPost, AppError> {
        let post = BlogPost::try_from(request)?;

        self.blog_post_repo.create_blog_post(&post).await?;
        info!(id = %post.id, slug = %post.slug, "Blog post created");

        Ok(post)
    }

    /// Retrieves all blog posts, newest first
    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        self.blog_post_repo.list_blog_posts().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::memory::InMemoryDocumentStore, repositories::document_repo::DocumentRepo};

    fn request(title: &str) -> NewBlogPostRequest {
        NewBlogPostRequest {
            title: title.into(),
            excerpt: "Short".into(),
            content: "<p>Body</p>".into(),
            category: "tutorials".into(),
            author: "Nikkitha".into(),
            image_url: "/images/artworks/one.jpg".into(),
            read_time: "3 min read".into(),
            tags: vec!["ink".into()],
        }
    }

    #[tokio::test]
    async fn newest_post_is_listed_first() {
        let handler = BlogPostHandler::new(DocumentRepo::new(Arc::new(InMemoryDocumentStore::new())));
        handler.create_blog_post(request("First steps in ink")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        handler.create_blog_post(request("Second steps in ink")).await.unwrap();

        let posts = handler.list_blog_posts().await.unwrap();
        assert_eq!(posts[0].slug, "second-steps-in-ink");
        assert_eq!(posts[1].slug, "first-steps-in-ink");
    }
}
