use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTagsInput {
    pub blog_post_content: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTagsOutput {
    pub tags: Vec<String>,
}

/// Suggests discoverability tags for a blog post body. The suggested list
/// may be empty.
#[async_trait]
pub trait TagSuggester: Send + Sync {
    async fn suggest_tags(&self, input: SuggestTagsInput) -> Result<SuggestTagsOutput>;
}

#[must_use]
pub fn prompt(input: &SuggestTagsInput) -> String {
    format!(
        "You are an expert in content tagging and SEO optimization.\n\n\
        Based on the content of the blog post provided, suggest a list of tags \
        that would be relevant for improving its discoverability. Return the \
        tags as a JSON array of strings.\n\n\
        Blog Post Content: {}",
        input.blog_post_content
    )
}

#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of suggested tags relevant to the blog post content.",
            },
        },
        "required": ["tags"],
    })
}
