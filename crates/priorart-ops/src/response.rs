//! Parsing of OPS JSON responses
//!
//! OPS wraps everything in namespaced keys and collapses single-element
//! lists to bare objects, so the response is walked loosely instead of
//! deserialized into fixed structs. Malformed entries are skipped with a
//! warning; they never fail the whole search.

use priorart_domain::record::MAX_CLASSIFICATIONS;
use serde_json::Value;
use tracing::warn;

/// One search hit, before claims and full text are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpsHit {
    /// Publication number in epodoc form, e.g. "EP1234567A1"
    pub(crate) publication: String,

    /// Invention title (English preferred)
    pub(crate) title: String,

    /// CPC classification codes (at most [`MAX_CLASSIFICATIONS`])
    pub(crate) cpc_classes: Vec<String>,
}

/// Extract search hits from a published-data search response.
pub(crate) fn parse_search_results(body: &Value) -> Vec<OpsHit> {
    let Some(result) = descend(
        body,
        &["ops:world-patent-data", "ops:biblio-search", "ops:search-result"],
    ) else {
        warn!("OPS response has no search result section");
        return Vec::new();
    };

    let mut hits = Vec::new();
    for wrapper in one_or_many(result.get("exchange-documents")) {
        for doc in one_or_many(wrapper.get("exchange-document")) {
            match parse_exchange_document(doc) {
                Some(hit) => hits.push(hit),
                None => warn!("skipping exchange document without a publication number"),
            }
        }
    }
    hits
}

fn parse_exchange_document(doc: &Value) -> Option<OpsHit> {
    let country = doc.get("@country").and_then(Value::as_str)?;
    let number = doc.get("@doc-number").and_then(Value::as_str)?;
    let kind = doc.get("@kind").and_then(Value::as_str).unwrap_or("");
    let publication = format!("{}{}{}", country, number, kind);

    let biblio = doc.get("bibliographic-data");

    let title = biblio
        .and_then(|b| invention_title(b.get("invention-title")))
        .unwrap_or_default();

    let cpc_classes = biblio
        .map(|b| classification_codes(b.get("patent-classifications")))
        .unwrap_or_default();

    Some(OpsHit {
        publication,
        title,
        cpc_classes,
    })
}

/// Pick the English title when present, otherwise the first one.
fn invention_title(titles: Option<&Value>) -> Option<String> {
    let titles = one_or_many(Some(titles?));

    titles
        .iter()
        .find(|t| t.get("@lang").and_then(Value::as_str) == Some("en"))
        .or_else(|| titles.first())
        .copied()
        .and_then(text_of)
}

/// Assemble CPC codes from their classification components.
fn classification_codes(classifications: Option<&Value>) -> Vec<String> {
    let Some(classifications) = classifications else {
        return Vec::new();
    };

    one_or_many(classifications.get("patent-classification"))
        .into_iter()
        .filter_map(classification_code)
        .take(MAX_CLASSIFICATIONS)
        .collect()
}

/// Build "C23C16/40"-style text from section/class/subclass/group parts.
fn classification_code(c: &Value) -> Option<String> {
    let part = |key: &str| c.get(key).and_then(text_of);

    let mut code = String::new();
    for key in ["section", "class", "subclass", "main-group"] {
        code.push_str(&part(key)?);
    }
    if let Some(subgroup) = part("subgroup") {
        code.push('/');
        code.push_str(&subgroup);
    }
    Some(code)
}

/// Extract claim texts from a published-data claims response.
///
/// Each `claim-text` entry is one claim string.
pub(crate) fn parse_claims_texts(body: &Value) -> Vec<String> {
    let Some(document) = fulltext_document(body) else {
        return Vec::new();
    };

    let mut texts = Vec::new();
    for claims in one_or_many(document.get("claims")) {
        for claim in one_or_many(claims.get("claim")) {
            for claim_text in one_or_many(claim.get("claim-text")) {
                if let Some(text) = text_of(claim_text) {
                    texts.push(text);
                }
            }
        }
    }
    texts
}

/// Extract the description text from a published-data description
/// response, paragraphs joined with newlines.
pub(crate) fn parse_description_text(body: &Value) -> String {
    let Some(document) = fulltext_document(body) else {
        return String::new();
    };

    let mut paragraphs = Vec::new();
    for description in one_or_many(document.get("description")) {
        for p in one_or_many(description.get("p")) {
            if let Some(text) = text_of(p) {
                paragraphs.push(text);
            }
        }
    }
    paragraphs.join("\n")
}

fn fulltext_document(body: &Value) -> Option<&Value> {
    descend(
        body,
        &["ops:world-patent-data", "ftxt:fulltext-documents", "ftxt:fulltext-document"],
    )
}

/// Follow a chain of object keys.
fn descend<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// Normalize OPS's single-object-vs-array convention to a list.
fn one_or_many(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Text content of a bare string or an OPS `{"$": "..."}` wrapper.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("$").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
