//! Projection of ranked documents to the public result shape

use crate::scorer::ScoredCandidate;
use helpdesk_core::{Document, RankedResult};

/// Project one document; an absent body becomes `""`
pub fn project_document(doc: &Document) -> RankedResult {
    RankedResult {
        id: doc.id.clone(),
        title: doc.title.clone(),
        body: doc.body_text().to_string(),
        url: doc.url.clone(),
    }
}

/// Project ranked candidates, preserving their order
pub fn project(candidates: &[ScoredCandidate<'_>]) -> Vec<RankedResult> {
    candidates
        .iter()
        .map(|candidate| project_document(candidate.document))
        .collect()
}
