use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PolicyDocument {
    #[schema(example = "POL001")]
    pub policy_id: String,
    #[schema(example = "Annual Leave Policy")]
    pub title: String,
    pub content: String,
    /// General, Annual, Sick, Emergency, Remote, Benefits
    #[schema(example = "Annual")]
    pub category: String,
    #[schema(example = "2024-12-01T09:30:00", format = "date-time", value_type = String)]
    pub created_at: NaiveDateTime,
    pub word_count: usize,
}

/// Listing view without the document body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PolicySummary {
    pub policy_id: String,
    pub title: String,
    pub category: String,
    pub word_count: usize,
    #[schema(format = "date-time", value_type = String)]
    pub created_at: NaiveDateTime,
}

impl From<&PolicyDocument> for PolicySummary {
    fn from(doc: &PolicyDocument) -> Self {
        Self {
            policy_id: doc.policy_id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            word_count: doc.word_count,
            created_at: doc.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PolicyMatch {
    pub policy_id: String,
    pub title: String,
    pub category: String,
    pub relevance_score: usize,
    pub excerpt: String,
    pub full_content: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PolicySource {
    pub title: String,
    pub policy_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PolicyAnswer {
    pub question: String,
    pub answer: String,
    pub sources: Vec<PolicySource>,
    pub confidence: Confidence,
    pub context_used: String,
}
