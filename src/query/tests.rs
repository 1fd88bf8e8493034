//! Tests for query encoding

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn repository_query() -> Query {
    Query::new(SearchKind::Repositories)
        .keyword("keyword")
        .qualifiers(Qualifiers {
            stars: Some(">=5".to_string()),
            topic: vec!["topic".to_string()],
            ..Default::default()
        })
        .limit(30)
        .order("stars")
        .sort("desc")
}

// ============================================================================
// Qualifier Tests
// ============================================================================

#[test]
fn test_qualifier_tokens() {
    let qualifiers = Qualifiers {
        topic: vec!["cli".to_string(), "rust".to_string()],
        stars: Some(">=5".to_string()),
        archived: Some(false),
        language: Some("go".to_string()),
        ..Default::default()
    };

    assert_eq!(
        qualifiers.tokens(),
        vec![
            "archived:false",
            "language:go",
            "stars:>=5",
            "topic:cli",
            "topic:rust",
        ]
    );
}

#[test]
fn test_qualifier_tokens_are_stable() {
    let qualifiers = repository_query().qualifiers;
    assert_eq!(qualifiers.tokens(), qualifiers.tokens());
    assert_eq!(qualifiers.clone().tokens(), qualifiers.tokens());
}

#[test]
fn test_unset_qualifiers_emit_nothing() {
    let qualifiers = Qualifiers {
        language: Some(String::new()),
        label: vec![String::new(), "bug".to_string()],
        ..Default::default()
    };
    assert_eq!(qualifiers.tokens(), vec!["label:bug"]);
    assert!(Qualifiers::default().is_empty());
}

#[test]
fn test_kebab_case_names() {
    let qualifiers = Qualifiers {
        good_first_issues: Some(">2".to_string()),
        reviewed_by: Some("octocat".to_string()),
        r#in: vec!["readme".to_string()],
        r#type: Some("pr".to_string()),
        ..Default::default()
    };
    assert_eq!(
        qualifiers.tokens(),
        vec![
            "good-first-issues:>2",
            "in:readme",
            "reviewed-by:octocat",
            "type:pr",
        ]
    );
}

#[test]
fn test_values_with_spaces_are_not_quoted() {
    let qualifiers = Qualifiers {
        label: vec!["help wanted".to_string()],
        ..Default::default()
    };
    assert_eq!(qualifiers.tokens(), vec!["label:help wanted"]);
}

// ============================================================================
// Query Tests
// ============================================================================

#[test]
fn test_q_keywords_then_qualifiers() {
    assert_eq!(repository_query().q(), "keyword stars:>=5 topic:topic");
}

#[test]
fn test_q_preserves_keyword_order() {
    let query = Query::new(SearchKind::Issues)
        .keyword("zeta")
        .keyword("alpha")
        .keyword("")
        .keyword(" ")
        .keyword("mid ");
    assert_eq!(query.q(), "zeta alpha mid");
    assert_eq!(query.to_string(), "zeta alpha mid");
}

#[test]
fn test_q_qualifiers_only() {
    let query = Query::new(SearchKind::Repositories).qualifiers(Qualifiers {
        org: Some("cli".to_string()),
        ..Default::default()
    });
    assert_eq!(query.q(), "org:cli");
}

#[test]
fn test_params() {
    let params = repository_query().params(PageRequest::new(1, 30));
    assert_eq!(
        params,
        vec![
            ("q", "keyword stars:>=5 topic:topic".to_string()),
            ("page", "1".to_string()),
            ("per_page", "30".to_string()),
            ("order", "stars".to_string()),
            ("sort", "desc".to_string()),
        ]
    );
}

#[test]
fn test_params_omit_empty_order_and_sort() {
    let query = Query::new(SearchKind::Code).keyword("fn main");
    let params = query.params(PageRequest::new(3, 7));
    assert_eq!(
        encode_params(&params),
        "q=fn+main&page=3&per_page=7"
    );
}

#[test]
fn test_web_params_sorted() {
    let encoded = encode_params(&repository_query().web_params());
    assert_eq!(
        encoded,
        "order=stars&q=keyword+stars%3A%3E%3D5+topic%3Atopic&sort=desc&type=repositories"
    );
}

#[test_case("repositories", SearchKind::Repositories)]
#[test_case("issues", SearchKind::Issues)]
#[test_case("code", SearchKind::Code)]
#[test_case("commits", SearchKind::Commits)]
fn test_search_kind_names(name: &str, kind: SearchKind) {
    assert_eq!(name.parse::<SearchKind>().unwrap(), kind);
    assert_eq!(kind.as_str(), name);
}

#[test]
fn test_unknown_search_kind() {
    assert!("users".parse::<SearchKind>().is_err());
}
