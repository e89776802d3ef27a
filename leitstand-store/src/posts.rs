use leitstand_ai::{
    error::AiError,
    flows::summarize_article::{ArticleSummarizer, SummarizeArticleInput},
};
use leitstand_common::{
    model::{
        Id,
        post::{Author, Category, CreatePost, Post, PostMarker, Tags},
        summary::{Summary, SummaryFallback},
    },
    slug::Slug,
};
use std::{num::NonZeroUsize, sync::Arc};
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::{error, warn};

pub const AUTHOR_AVATAR_PLACEHOLDER: &str = "https://placehold.co/100x100.png";

/// The authoritative post collection. Reads that encounter a post without a
/// summary ask the summarizer and write a successful result back to the
/// stored record; failures degrade to fallback text on the returned copy
/// only, so the next read retries. No operation surfaces an AI failure.
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
    summarizer: Arc<dyn ArticleSummarizer>,
}

impl PostStore {
    #[must_use]
    pub fn new(summarizer: Arc<dyn ArticleSummarizer>) -> Self {
        Self::with_posts(Vec::new(), summarizer)
    }

    #[must_use]
    pub fn with_posts(posts: Vec<Post>, summarizer: Arc<dyn ArticleSummarizer>) -> Self {
        Self {
            posts: RwLock::new(posts),
            summarizer,
        }
    }

    /// One page of matching posts, newest first. Ties on `published_at` keep
    /// collection order, and creation inserts at the front, so simultaneous
    /// timestamps list most-recently-created first.
    pub async fn list(
        &self,
        filter: &PostFilter,
        page: NonZeroUsize,
        per_page: NonZeroUsize,
    ) -> Vec<Post> {
        let mut matching: Vec<Post> = {
            let posts = self.posts.read().await;
            posts
                .iter()
                .filter(|post| filter.matches(post))
                .cloned()
                .collect()
        };

        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let mut page_posts: Vec<Post> = matching
            .into_iter()
            .skip((page.get() - 1).saturating_mul(per_page.get()))
            .take(per_page.get())
            .collect();

        for post in &mut page_posts {
            if post.summary.is_missing() {
                self.fill_missing_summary(post).await;
            }
        }

        page_posts
    }

    /// Matching post count before pagination.
    pub async fn count(&self, filter: &PostFilter) -> usize {
        let posts = self.posts.read().await;
        posts.iter().filter(|post| filter.matches(post)).count()
    }

    pub async fn get_by_slug(&self, slug: &str) -> Option<Post> {
        let mut post = {
            let posts = self.posts.read().await;
            posts.iter().find(|post| post.slug.get() == slug).cloned()
        }?;

        if post.summary.is_missing() {
            self.fill_missing_summary(&mut post).await;
        }

        Some(post)
    }

    /// Distinct categories in use, lexicographically ascending. Recomputed
    /// from current state on every call.
    pub async fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = {
            let posts = self.posts.read().await;
            posts.iter().map(|post| post.category.clone()).collect()
        };

        categories.sort();
        categories.dedup();
        categories
    }

    /// Creates a post from an admin submission. Summarization runs first and
    /// never blocks creation; on failure the post carries the pending
    /// fallback instead. Slug uniqueness is settled under the write lock, so
    /// concurrent creates cannot race the check-then-insert.
    pub async fn create(&self, create: CreatePost) -> Post {
        let id = Id::random();

        let summary = match self
            .summarizer
            .summarize_article(SummarizeArticleInput {
                article_text: create.content_markdown.clone(),
            })
            .await
        {
            Ok(output) => Summary::Generated(output.summary),
            Err(error) => {
                log_summarize_failure(id, &error);
                Summary::Fallback(SummaryFallback::CreationPending)
            }
        };

        let mut posts = self.posts.write().await;
        let post = Post {
            id,
            slug: free_slug(&posts, &create.title),
            title: create.title,
            content_markdown: create.content_markdown,
            summary,
            image_url: create.image_url,
            category: create.category,
            tags: Tags::from_comma_separated(&create.tags_string),
            published_at: OffsetDateTime::now_utc(),
            author: Author {
                name: create.author_name,
                avatar_url: Some(AUTHOR_AVATAR_PLACEHOLDER.to_owned()),
            },
        };
        posts.insert(0, post.clone());

        post
    }

    /// Summarizes a post that was read without a summary. Success is written
    /// back to the stored record (first write wins); failure only touches the
    /// returned copy, so a later read tries again.
    async fn fill_missing_summary(&self, post: &mut Post) {
        match self
            .summarizer
            .summarize_article(SummarizeArticleInput {
                article_text: post.content_markdown.clone(),
            })
            .await
        {
            Ok(output) => {
                let summary = Summary::Generated(output.summary);

                let mut posts = self.posts.write().await;
                if let Some(stored) = posts.iter_mut().find(|stored| stored.id == post.id)
                    && stored.summary.is_missing()
                {
                    stored.summary = summary.clone();
                }

                post.summary = summary;
            }
            Err(error) => {
                log_summarize_failure(post.id, &error);
                post.summary = Summary::Fallback(SummaryFallback::ReadUnavailable);
            }
        }
    }
}

/// Optional conjunctive post filters. Empty strings count as absent, the way
/// blank form fields arrive.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct PostFilter {
    category: Option<Category>,
    query: Option<String>,
}

impl PostFilter {
    #[must_use]
    pub fn new(category: Option<Category>, query: Option<String>) -> Self {
        Self {
            category: category.filter(|category| !category.get().is_empty()),
            query: query.filter(|query| !query.is_empty()),
        }
    }

    /// Category matches exactly; the query matches case-insensitively as a
    /// substring of the title, the markdown body, or the summary text.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category) = &self.category
            && post.category != *category
        {
            return false;
        }

        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let found = post.title.to_lowercase().contains(&query)
                || post.content_markdown.to_lowercase().contains(&query)
                || post.summary.text().to_lowercase().contains(&query);
            if !found {
                return false;
            }
        }

        true
    }
}

fn free_slug(posts: &[Post], title: &str) -> Slug {
    let base = Slug::generate(title);
    if !posts.iter().any(|post| post.slug == base) {
        return base;
    }

    let mut counter = 1;
    loop {
        let candidate = base.with_suffix(counter);
        if !posts.iter().any(|post| post.slug == candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn log_summarize_failure(post_id: Id<PostMarker>, error: &AiError) {
    if error.is_rate_limited() {
        warn!(%post_id, error = %error, "Summarization hit the provider rate limit");
    } else {
        error!(%post_id, error = %error, "Failed to summarize article");
    }
}
