//! Policy documents with keyword retrieval for leave policy questions.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::model::policy::{
    Confidence, PolicyAnswer, PolicyDocument, PolicyMatch, PolicySource, PolicySummary,
};

pub const DEFAULT_MAX_RESULTS: usize = 3;

const EXCERPT_CHARS: usize = 300;
const TITLE_MATCH_SCORE: usize = 10;

#[derive(Debug, Default)]
pub struct PolicyStore {
    documents: Vec<PolicyDocument>,
    index: HashMap<String, usize>,
}

fn category_matches(doc: &PolicyDocument, category: Option<&str>) -> bool {
    category.is_none_or(|c| doc.category.eq_ignore_ascii_case(c))
}

fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Title hits weigh 10, each content occurrence weighs 1.
fn relevance(doc: &PolicyDocument, query: &str) -> usize {
    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();

    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let title_score = if title.contains(word) { TITLE_MATCH_SCORE } else { 0 };
            title_score + content.matches(word).count()
        })
        .sum()
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Adds a document, replacing any document with the same id in place.
    pub fn add(
        &mut self,
        policy_id: &str,
        title: &str,
        content: &str,
        category: &str,
        now: NaiveDateTime,
    ) -> LedgerResult<PolicySummary> {
        let policy_id = policy_id.trim();
        if policy_id.is_empty() {
            return Err(LedgerError::InvalidInput(
                "policy_id must not be empty".to_string(),
            ));
        }

        let doc = PolicyDocument {
            policy_id: policy_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            category: match category.trim() {
                "" => "General".to_string(),
                c => c.to_string(),
            },
            created_at: now,
            word_count: content.split_whitespace().count(),
        };
        let summary = PolicySummary::from(&doc);

        match self.index.get(policy_id) {
            Some(&idx) => self.documents[idx] = doc,
            None => {
                self.index.insert(policy_id.to_string(), self.documents.len());
                self.documents.push(doc);
            }
        }

        info!(
            policy_id,
            category = %summary.category,
            words = summary.word_count,
            "Policy document stored"
        );
        Ok(summary)
    }

    pub fn get(&self, policy_id: &str) -> LedgerResult<&PolicyDocument> {
        let policy_id = policy_id.trim();
        self.index
            .get(policy_id)
            .map(|&idx| &self.documents[idx])
            .ok_or_else(|| LedgerError::policy_not_found(policy_id))
    }

    pub fn list(&self, category: Option<&str>) -> Vec<PolicySummary> {
        self.documents
            .iter()
            .filter(|d| category_matches(d, category))
            .map(PolicySummary::from)
            .collect()
    }

    /// Keyword search ordered by descending relevance. Ties keep insertion order.
    pub fn search(
        &self,
        query: &str,
        category: Option<&str>,
        max_results: usize,
    ) -> Vec<PolicyMatch> {
        let mut matches: Vec<PolicyMatch> = self
            .documents
            .iter()
            .filter(|d| category_matches(d, category))
            .filter_map(|doc| {
                let score = relevance(doc, query);
                (score > 0).then(|| PolicyMatch {
                    policy_id: doc.policy_id.clone(),
                    title: doc.title.clone(),
                    category: doc.category.clone(),
                    relevance_score: score,
                    excerpt: excerpt(&doc.content),
                    full_content: doc.content.clone(),
                })
            })
            .collect();

        matches.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        matches.truncate(max_results);
        matches
    }

    pub fn ask(&self, question: &str, category: Option<&str>) -> PolicyAnswer {
        let docs = self.search(question, category, DEFAULT_MAX_RESULTS);

        if docs.is_empty() {
            return PolicyAnswer {
                question: question.to_string(),
                answer: "I couldn't find any relevant policy documents for your question."
                    .to_string(),
                sources: Vec::new(),
                confidence: Confidence::Low,
                context_used: String::new(),
            };
        }

        let context_used = docs
            .iter()
            .map(|d| format!("[{}]\n{}", d.title, d.full_content))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut answer = String::from("Based on the available policies, here's what I found:\n\n");
        for (n, doc) in docs.iter().enumerate() {
            answer.push_str(&format!(
                "{}. From '{}' ({}):\n   {}\n\n",
                n + 1,
                doc.title,
                doc.category,
                doc.excerpt
            ));
        }

        PolicyAnswer {
            question: question.to_string(),
            answer,
            sources: docs
                .iter()
                .map(|d| PolicySource {
                    title: d.title.clone(),
                    policy_id: d.policy_id.clone(),
                })
                .collect(),
            confidence: if docs.len() >= 2 {
                Confidence::High
            } else {
                Confidence::Medium
            },
            context_used,
        }
    }
}
