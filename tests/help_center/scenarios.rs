use crate::flaky::FlakySource;
use helpdesk::{
    CorpusLoader, Document, DocumentId, Error, ErrorBody, MemorySource, SearchEngine, MAX_RESULTS,
};
use std::sync::Arc;

fn articles(n: u64) -> Vec<Document> {
    (1..=n)
        .map(|i| {
            Document::new(i, format!("Guide {}", i))
                .with_body("general information")
                .with_url(format!("https://acme.zendesk.com/hc/articles/{}", i))
        })
        .collect()
}

#[test]
fn password_reset_ranks_title_match_first() {
    let source = MemorySource::new(vec![
        Document::new(1u64, "Reset your password").with_body("..."),
        Document::new(2u64, "Billing FAQ").with_body("password reset instructions here"),
    ]);
    let engine = SearchEngine::new(Arc::new(source));

    let response = engine.search("password reset").unwrap();
    let ids: Vec<_> = response.results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![DocumentId::Number(1), DocumentId::Number(2)]);
    assert_eq!(response.count, 2);
}

#[test]
fn unknown_word_returns_empty_response() {
    let engine = SearchEngine::new(Arc::new(MemorySource::new(articles(40))));

    let response = engine.search("invoice").unwrap();
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"results":[],"count":0}"#
    );
}

#[test]
fn upstream_failure_after_two_pages_is_absorbed() {
    let mut documents = articles(250);
    documents[10] = Document::new(11u64, "Password policy");
    documents[199] = Document::new(200u64, "Change your password");
    documents[220] = Document::new(221u64, "Password on the missing page");
    let source = FlakySource::new(MemorySource::new(documents), 2);
    let engine = SearchEngine::new(Arc::new(source));

    let outcome = engine.execute("password").unwrap();
    assert!(outcome.stats.degraded);
    assert_eq!(outcome.stats.corpus_size, 200);
    let ids: Vec<_> = outcome.response.results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![DocumentId::Number(11), DocumentId::Number(200)]);
}

#[test]
fn pagination_reads_every_page() {
    let source = MemorySource::new(articles(207));
    let corpus = CorpusLoader::new(&source).load();
    assert_eq!(corpus.len(), 207);
    assert_eq!(corpus.pages_fetched, 3);

    let engine = SearchEngine::new(Arc::new(source));
    let outcome = engine.execute("guide").unwrap();
    assert_eq!(outcome.stats.candidates_matched, 207);
    assert_eq!(outcome.response.count, MAX_RESULTS);
}

#[test]
fn whitespace_query_is_invalid() {
    let engine = SearchEngine::new(Arc::new(MemorySource::new(articles(3))));

    let err = engine.search(" \t ").unwrap_err();
    assert!(matches!(err, Error::InvalidQuery(_)));
    assert!(err.is_client_error());

    let body = ErrorBody::from(&err);
    assert_eq!(body.error, "invalid_query");
}

#[test]
fn punctuation_query_does_not_fail() {
    let source = MemorySource::new(vec![
        Document::new(1u64, "C++ client library"),
        Document::new(2u64, "Python client library"),
    ]);
    let engine = SearchEngine::new(Arc::new(source));

    let response = engine.search("c++").unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.results[0].title, "C++ client library");
}

#[test]
fn exported_listing_is_searchable() {
    let source = MemorySource::from_json_str(
        r#"{"articles": [
              {"id": 360001, "title": "Set up single sign-on",
               "body": "<p>Configure SAML</p>",
               "html_url": "https://acme.zendesk.com/hc/en-us/articles/360001"},
              {"id": 360002, "title": "Close your account", "body": null,
               "html_url": "https://acme.zendesk.com/hc/en-us/articles/360002"}
            ],
            "next_page": null}"#,
    )
    .unwrap();
    let engine = SearchEngine::new(Arc::new(source));

    let response = engine.search("sign-on").unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(
        response.results[0].url,
        "https://acme.zendesk.com/hc/en-us/articles/360001"
    );

    let response = engine.search("account").unwrap();
    assert_eq!(response.results[0].id, DocumentId::Number(360002));
    assert_eq!(response.results[0].body, "");
}
