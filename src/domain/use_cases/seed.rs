use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    entities::{
        artwork::{Artwork, ArtworkCategory},
        blog_post::{BlogCategory, BlogPost},
        service::Service,
        testimonial::{ArtworkType, Testimonial, TestimonialStatus},
    },
    errors::AppError,
    repositories::{
        artwork::ArtworkRepository, blog_post::BlogPostRepository, service::ServiceRepository,
        testimonial::TestimonialRepository,
    },
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub artworks: u64,
    pub testimonials: u64,
    pub services: u64,
    pub blog_posts: u64,
}

impl SeedOutcome {
    pub fn is_empty(&self) -> bool {
        *self == SeedOutcome::default()
    }
}

/// Fills an empty store with the sample gallery. The artwork collection is
/// the marker: once it holds anything, seeding is a no-op.
pub struct Seeder<R> {
    repo: R,
}

impl<R> Seeder<R>
where
    R: ArtworkRepository + TestimonialRepository + ServiceRepository + BlogPostRepository,
{
    pub fn new(repo: R) -> Self {
        Seeder { repo }
    }

    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, AppError> {
        if self.repo.count_artworks().await? > 0 {
            info!("Sample data already present; skipping seed");
            return Ok(SeedOutcome::default());
        }

        let now = Utc::now();
        let outcome = SeedOutcome {
            artworks: self.repo.insert_artworks(&sample_artworks(now)).await?,
            testimonials: self.repo.insert_testimonials(&sample_testimonials(now)).await?,
            services: self.repo.insert_services(&sample_services(now)).await?,
            blog_posts: self.repo.insert_blog_posts(&sample_blog_posts()).await?,
        };

        info!(
            artworks = outcome.artworks,
            testimonials = outcome.testimonials,
            services = outcome.services,
            blog_posts = outcome.blog_posts,
            "Seeded sample data"
        );
        Ok(outcome)
    }
}

fn artwork(now: DateTime<Utc>, title: &str, category: ArtworkCategory, image_url: &str, description: &str) -> Artwork {
    Artwork {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category,
        image_url: image_url.to_string(),
        description: Some(description.to_string()),
        created_at: now,
    }
}

pub fn sample_artworks(now: DateTime<Utc>) -> Vec<Artwork> {
    use ArtworkCategory::*;

    [
        ("Contemporary Portrait", Portraits, "https://images.unsplash.com/photo-1500648767791-00dcc994a43e", "Professional male portrait study"),
        ("Elegant Portrait", Portraits, "https://images.unsplash.com/photo-1534528741775-53994a69daeb", "Professional female portrait"),
        ("Artistic Portrait", Portraits, "https://images.unsplash.com/photo-1544005313-94ddf0286df2", "Creative portrait photography"),
        ("Classical Painting", Paintings, "https://images.unsplash.com/photo-1579783928621-7a13d66a62d1", "Traditional painting style"),
        ("Landscape Art", Paintings, "https://images.unsplash.com/photo-1578301978693-85fa9c0320b9", "Beautiful landscape painting"),
        ("Art Supplies", Paintings, "https://images.pexels.com/photos/102127/pexels-photo-102127.jpeg", "Paint palette and brushes"),
        ("Eye Study", Sketches, "https://images.unsplash.com/photo-1602738328654-51ab2ae6c4ff", "Detailed eye sketch"),
        ("Abstract Drawing", Sketches, "https://images.unsplash.com/photo-1569091791842-7cfb64e04797", "Abstract ink drawing"),
        ("Pet Portrait", Sketches, "https://images.unsplash.com/photo-1640894822819-0a94bec464bf", "Dog portrait sketch"),
        ("Digital Performance", Digital, "https://images.unsplash.com/photo-1593073862407-a3ce22748763", "Digital stage art"),
        ("Fantasy Forest", Digital, "https://images.unsplash.com/photo-1635322966219-b75ed372eb01", "Fantasy forest scene"),
        ("Floral Digital", Digital, "https://images.unsplash.com/photo-1641391503184-a2131018701b", "Digital floral portrait"),
        ("Artistic Tee", Tshirt, "https://images.unsplash.com/photo-1685883518316-355533810d68", "Artistic t-shirt design"),
        ("Design Mockup", Tshirt, "https://images.unsplash.com/photo-1618677603286-0ec56cb6e1b5", "T-shirt mockup"),
        ("Clean Template", Tshirt, "https://images.unsplash.com/photo-1618677603544-51162346e165", "Clean t-shirt template"),
    ]
    .into_iter()
    .map(|(title, category, url, description)| artwork(now, title, category, url, description))
    .collect()
}

/// Already approved so the testimonials section is never empty. Staggered
/// timestamps keep the newest-first order stable.
pub fn sample_testimonials(now: DateTime<Utc>) -> Vec<Testimonial> {
    [
        (
            "Sarah Johnson",
            "sarah.j@email.com",
            "Nikkitha created a beautiful portrait of my daughter that captured her personality perfectly. The attention to detail and artistic skill is remarkable!",
            ArtworkType::Portrait,
        ),
        (
            "Michael Chen",
            "m.chen@email.com",
            "The custom t-shirt design exceeded all expectations. Professional, creative, and delivered on time. Highly recommend for any custom art needs!",
            ArtworkType::Tshirt,
        ),
        (
            "Emily Rodriguez",
            "emily.r@email.com",
            "Working with Nikkitha was an absolute pleasure. She understood my vision for the painting and brought it to life beautifully.",
            ArtworkType::Painting,
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, email, message, artwork_type))| Testimonial {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        rating: 5,
        artwork_type: Some(artwork_type),
        would_recommend: Some(true),
        status: TestimonialStatus::Approved,
        created_at: now - Duration::days(i as i64),
    })
    .collect()
}

pub fn sample_services(now: DateTime<Utc>) -> Vec<Service> {
    [
        ("Custom Portraits", "Professional portrait commissions in various mediums - pencil, charcoal, oil, or digital.", "Starting at $150", "https://images.unsplash.com/photo-1579783928621-7a13d66a62d1"),
        ("Painting Commissions", "Original paintings tailored to your vision - landscapes, abstracts, or custom concepts.", "Starting at $300", "https://images.unsplash.com/photo-1578301978693-85fa9c0320b9"),
        ("T-Shirt Design", "Unique t-shirt artwork for personal use, brands, or events.", "Starting at $100", "https://images.unsplash.com/photo-1685883518316-355533810d68"),
        ("Digital Art", "Modern digital illustrations perfect for prints, social media, or commercial use.", "Starting at $200", "https://images.unsplash.com/photo-1635322966219-b75ed372eb01"),
        ("Sketches & Drawings", "Quick sketches, detailed drawings, and custom illustration work.", "Starting at $75", "https://images.unsplash.com/photo-1602738328654-51ab2ae6c4ff"),
        ("Bulk/Commercial", "Large orders and commercial projects. Contact for custom pricing.", "Custom Quote", "https://images.pexels.com/photos/102127/pexels-photo-102127.jpeg"),
    ]
    .into_iter()
    .map(|(title, description, price, image_url)| Service {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image_url: image_url.to_string(),
        created_at: now,
    })
    .collect()
}

fn published(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn sample_blog_posts() -> Vec<BlogPost> {
    [
        (
            "The Art of Color Theory in Portrait Painting",
            "Discover how understanding color relationships can transform your portrait paintings from good to breathtaking. Learn the secrets of warm and cool tones.",
            "Color theory is the foundation of all visual arts. Understanding how colors interact, complement, and contrast with each other is essential for creating compelling artwork. In this post, we explore the color wheel, complementary colors, and how to use them effectively in your portrait paintings.",
            BlogCategory::Techniques,
            "/images/artworks/IMG_20221110_183351_400.jpg",
            "5 min read",
            ["color theory", "portrait", "painting"],
            published(2024, 1, 15),
        ),
        (
            "From Sketch to Masterpiece: My Creative Process Revealed",
            "Take a journey through my artistic process, from initial concept sketches to finished artwork. See how ideas evolve into stunning creations.",
            "Every masterpiece begins with a simple sketch. This comprehensive guide takes you through my complete creative process, from initial concept development to final artwork completion. Learn about sketching techniques, composition planning, and how to bring your artistic vision to life.",
            BlogCategory::BehindScenes,
            "/images/artworks/IMG_20221022_135924.jpg",
            "8 min read",
            ["process", "sketching", "creation"],
            published(2024, 1, 20),
        ),
        (
            "The Psychology of Art: How Colors Affect Emotions",
            "Explore the fascinating connection between colors and human emotions. Learn how to use this knowledge to create more impactful artwork.",
            "Colors have a profound impact on human emotions and behavior. This post explores the fascinating connection between colors and human psychology. Learn how to use warm colors to evoke energy and passion, cool colors for calmness, and how to create emotional depth in your artwork.",
            BlogCategory::Inspiration,
            "/images/artworks/IMG_20221106_125129_724.jpg",
            "6 min read",
            ["psychology", "emotions", "color"],
            published(2024, 1, 25),
        ),
    ]
    .into_iter()
    .map(|(title, excerpt, content, category, image_url, read_time, tags, created_at)| BlogPost {
        id: Uuid::new_v4(),
        title: title.to_string(),
        slug: slug::slugify(title),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        category,
        author: "Nikkitha".to_string(),
        image_url: image_url.to_string(),
        read_time: read_time.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::memory::InMemoryDocumentStore, repositories::document_repo::DocumentRepo};

    #[tokio::test]
    async fn seeding_twice_inserts_nothing_the_second_time() {
        let seeder = Seeder::new(DocumentRepo::new(Arc::new(InMemoryDocumentStore::new())));

        let first = seeder.seed_if_empty().await.unwrap();
        assert_eq!(first, SeedOutcome { artworks: 15, testimonials: 3, services: 6, blog_posts: 3 });

        let second = seeder.seed_if_empty().await.unwrap();
        assert!(second.is_empty());
        assert_eq!(seeder.repo.count_artworks().await.unwrap(), 15);
    }

    #[test]
    fn sample_testimonials_are_approved_and_distinct() {
        let testimonials = sample_testimonials(Utc::now());
        assert!(testimonials.iter().all(|t| t.status == TestimonialStatus::Approved));
        assert!(testimonials.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }
}
