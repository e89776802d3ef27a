use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeArticleInput {
    pub article_text: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeArticleOutput {
    pub summary: String,
}

/// Produces a short summary for an article body.
#[async_trait]
pub trait ArticleSummarizer: Send + Sync {
    async fn summarize_article(
        &self,
        input: SummarizeArticleInput,
    ) -> Result<SummarizeArticleOutput>;
}

#[must_use]
pub fn prompt(input: &SummarizeArticleInput) -> String {
    format!(
        "Summarize the following article in a concise paragraph:\n\n{}",
        input.article_text
    )
}

#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A brief summary of the article.",
            },
        },
        "required": ["summary"],
    })
}

#[cfg(test)]
mod tests {
    use crate::flows::summarize_article::{SummarizeArticleInput, SummarizeArticleOutput, prompt};

    #[test]
    fn prompt_embeds_the_article_text() {
        let input = SummarizeArticleInput {
            article_text: "Robots assemble cars.".to_owned(),
        };
        let prompt = prompt(&input);
        assert!(prompt.starts_with("Summarize the following article"));
        assert!(prompt.ends_with("Robots assemble cars."));
    }

    #[test]
    fn input_and_output_use_the_wire_field_names() {
        let input: SummarizeArticleInput =
            serde_json::from_str(r#"{"articleText":"body"}"#).unwrap();
        assert_eq!(input.article_text, "body");

        let output = SummarizeArticleOutput {
            summary: "Short.".to_owned(),
        };
        assert_eq!(
            serde_json::to_string(&output).unwrap(),
            r#"{"summary":"Short."}"#
        );
    }
}
