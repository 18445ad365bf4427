use super::*;
use crate::net::test_helpers::{Call, MockClient, article_json};
use futures::executor::block_on;

#[test]
fn article_feed_options_sort_newest_first_with_author() {
    let options = article_feed_options();
    assert_eq!(options.sort.as_deref(), Some("-created"));
    assert_eq!(options.expand.as_deref(), Some("user"));
    assert_eq!(options.filter, None);
}

#[test]
fn user_name_filter_quotes_name() {
    assert_eq!(user_name_filter("Ralph Edwards"), "name=\"Ralph Edwards\"");
    assert_eq!(user_name_filter("x\" || 1=1"), "name=\"x\\\" || 1=1\"");
}

#[test]
fn fetch_articles_requests_feed_and_keeps_order() {
    let client = MockClient::new().with_list(Ok(vec![
        article_json("a2", "Second", "2024-03-06 10:00:00.000Z", Some("Ralph")),
        article_json("a1", "First", "2024-03-05 10:00:00.000Z", None),
    ]));

    let articles = block_on(fetch_articles(&client)).expect("articles");
    let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a2", "a1"]);
    assert_eq!(articles[0].author_name(), Some("Ralph"));
    assert_eq!(
        client.calls(),
        vec![Call::FullList { collection: ARTICLES.to_owned(), options: article_feed_options() }]
    );
}

#[test]
fn fetch_articles_reports_undecodable_records() {
    let client = MockClient::new().with_list(Ok(vec![serde_json::json!({ "title": "no id" })]));
    let err = block_on(fetch_articles(&client)).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn find_user_by_name_uses_name_filter() {
    let client = MockClient::new().with_first(Ok(serde_json::json!({ "id": "u1", "name": "Ralph" })));
    let user = block_on(find_user_by_name(&client, "Ralph")).expect("user");
    assert_eq!(user.id, "u1");
    assert_eq!(
        client.calls(),
        vec![Call::FirstListItem { collection: USERS.to_owned(), filter: "name=\"Ralph\"".to_owned() }]
    );
}

#[test]
fn find_user_by_name_propagates_not_found() {
    let client = MockClient::new().with_first(Err(ApiError::NotFound));
    assert_eq!(block_on(find_user_by_name(&client, "Nobody")), Err(ApiError::NotFound));
}
