use crate::server::{Result, ServerError, ServerRouter, json::Json, query::Query};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use leitstand_common::{
    model::post::{Category, CreatePost, Post},
    slug::Slug,
};
use leitstand_store::posts::{PostFilter, PostStore};
use serde::{Deserialize, Serialize};
use std::{num::NonZeroUsize, sync::Arc};

/// Page size of the blog index when the caller does not pass a limit.
const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(12).unwrap();

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_posts)
        .typed_get(list_categories)
        .typed_get(get_post)
        .typed_post(create_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts", rejection(ServerError))]
struct ListPostsPath();

#[derive(Debug, Deserialize)]
struct ListPostsParams {
    category: Option<Category>,
    q: Option<String>,
    page: Option<NonZeroUsize>,
    limit: Option<NonZeroUsize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PostPage {
    posts: Vec<Post>,
    total: usize,
    page: usize,
    per_page: usize,
}

async fn list_posts(
    ListPostsPath(): ListPostsPath,
    State(posts): State<Arc<PostStore>>,
    Query(params): Query<ListPostsParams>,
) -> Json<PostPage> {
    let filter = PostFilter::new(params.category, params.q);
    let page = params.page.unwrap_or(NonZeroUsize::MIN);
    let per_page = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);

    let listed = posts.list(&filter, page, per_page).await;
    let total = posts.count(&filter).await;

    Json(PostPage {
        posts: listed,
        total,
        page: page.get(),
        per_page: per_page.get(),
    })
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/categories", rejection(ServerError))]
struct ListCategoriesPath();

async fn list_categories(
    ListCategoriesPath(): ListCategoriesPath,
    State(posts): State<Arc<PostStore>>,
) -> Json<Vec<Category>> {
    Json(posts.categories().await)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{slug}", rejection(ServerError))]
struct GetPostPath {
    slug: Slug,
}

async fn get_post(
    GetPostPath { slug }: GetPostPath,
    State(posts): State<Arc<PostStore>>,
) -> Result<Json<Post>> {
    let post = posts
        .get_by_slug(slug.get())
        .await
        .ok_or(ServerError::PostBySlugNotFound(slug))?;

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/create", rejection(ServerError))]
struct CreatePostPath();

async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(posts): State<Arc<PostStore>>,
    Json(create): Json<CreatePost>,
) -> Json<Post> {
    let post = posts.create(create).await;

    Json(post)
}

#[cfg(test)]
mod tests {
    use crate::server::{routes, test_support};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    const FIRST_SEED_SLUG: &str = "getting-started-with-plc-programming-a-beginners-guide";

    #[tokio::test]
    async fn listing_returns_the_page_envelope() {
        let app = routes().with_state(test_support::seeded_state());

        let response = app
            .oneshot(test_support::get("/posts?limit=3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = test_support::response_json(response).await;
        assert_eq!(body["total"], 10);
        assert_eq!(body["page"], 1);
        assert_eq!(body["perPage"], 3);
        assert_eq!(body["posts"].as_array().unwrap().len(), 3);
        assert_eq!(body["posts"][0]["slug"], FIRST_SEED_SLUG);
    }

    #[tokio::test]
    async fn listing_defaults_to_twelve_per_page() {
        let app = routes().with_state(test_support::seeded_state());

        let body = test_support::response_json(
            app.oneshot(test_support::get("/posts")).await.unwrap(),
        )
        .await;

        assert_eq!(body["perPage"], 12);
        assert_eq!(body["posts"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn listing_applies_category_and_query_filters() {
        let app = routes().with_state(test_support::seeded_state());

        let body = test_support::response_json(
            app.clone()
                .oneshot(test_support::get("/posts?category=Controls"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(body["total"], 3);

        let body = test_support::response_json(
            app.oneshot(test_support::get("/posts?q=nav2")).await.unwrap(),
        )
        .await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["posts"][0]["title"], "Mastering ROS 2 Navigation for Mobile Robots");
    }

    #[tokio::test]
    async fn listing_past_the_last_page_is_empty_but_counted() {
        let app = routes().with_state(test_support::seeded_state());

        let body = test_support::response_json(
            app.oneshot(test_support::get("/posts?page=9")).await.unwrap(),
        )
        .await;

        assert_eq!(body["posts"].as_array().unwrap().len(), 0);
        assert_eq!(body["total"], 10);
        assert_eq!(body["page"], 9);
    }

    #[tokio::test]
    async fn maximal_paging_parameters_reply_with_an_empty_page() {
        let app = routes().with_state(test_support::seeded_state());

        let body = test_support::response_json(
            app.oneshot(test_support::get(&format!(
                "/posts?page={max}&limit={max}",
                max = usize::MAX
            )))
            .await
            .unwrap(),
        )
        .await;

        assert_eq!(body["posts"].as_array().unwrap().len(), 0);
        assert_eq!(body["total"], 10);
    }

    #[tokio::test]
    async fn page_zero_is_rejected() {
        let app = routes().with_state(test_support::seeded_state());

        let response = app
            .oneshot(test_support::get("/posts?page=0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::response_json(response).await;
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn categories_come_back_sorted() {
        let app = routes().with_state(test_support::seeded_state());

        let body = test_support::response_json(
            app.oneshot(test_support::get("/categories")).await.unwrap(),
        )
        .await;

        assert_eq!(
            body,
            json!(["AI", "Controls", "Industrial IoT", "Infrastructure", "Robotics"])
        );
    }

    #[tokio::test]
    async fn fetching_a_seeded_post_by_slug_works() {
        let app = routes().with_state(test_support::seeded_state());

        let response = app
            .oneshot(test_support::get(&format!("/posts/{FIRST_SEED_SLUG}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = test_support::response_json(response).await;
        assert_eq!(body["slug"], FIRST_SEED_SLUG);
        assert_eq!(body["category"], "Controls");
    }

    #[tokio::test]
    async fn unknown_slugs_reply_not_found() {
        let app = routes().with_state(test_support::seeded_state());

        let response = app
            .oneshot(test_support::get("/posts/not-a-real-slug"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = test_support::response_json(response).await;
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn created_posts_are_fetchable_and_counted() {
        let app = routes().with_state(test_support::seeded_state());

        let create = json!({
            "title": "Hello World",
            "category": "Robotics",
            "tagsString": " plc , welding ",
            "imageUrl": "https://placehold.co/600x400.png",
            "authorName": "Admin",
            "contentMarkdown": "## Hello\n\nA brand new post.",
        });
        let response = app
            .clone()
            .oneshot(test_support::post_json("/posts/create", &create))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = test_support::response_json(response).await;
        assert_eq!(body["slug"], "hello-world");
        assert_eq!(body["tags"], json!(["plc", "welding"]));
        assert_eq!(body["summary"], test_support::STUB_SUMMARY);
        assert_eq!(body["author"]["name"], "Admin");

        let fetched = test_support::response_json(
            app.clone()
                .oneshot(test_support::get("/posts/hello-world"))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(fetched["title"], "Hello World");

        let listed = test_support::response_json(
            app.oneshot(test_support::get("/posts")).await.unwrap(),
        )
        .await;
        assert_eq!(listed["total"], 11);
    }

    #[tokio::test]
    async fn create_rejects_malformed_bodies() {
        let app = routes().with_state(test_support::seeded_state());

        let response = app
            .oneshot(test_support::post_json(
                "/posts/create",
                &json!({ "title": "Missing everything else" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = test_support::response_json(response).await;
        assert_eq!(body["status"], 400);
    }
}
