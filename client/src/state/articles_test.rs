use super::*;

#[test]
fn feed_revision_advances() {
    let rev = FeedRevision::default();
    assert_eq!(rev.next(), FeedRevision(1));
    assert_eq!(FeedRevision(u32::MAX).next(), FeedRevision(0));
}

#[test]
fn from_fetch_pending_is_loading() {
    assert_eq!(FeedState::from_fetch(None), FeedState::Loading);
}

#[test]
fn from_fetch_keeps_articles_in_order() {
    let articles = vec![
        Article { id: "b".to_owned(), ..Article::default() },
        Article { id: "a".to_owned(), ..Article::default() },
    ];
    match FeedState::from_fetch(Some(Ok(articles.clone()))) {
        FeedState::Loaded(list) => assert_eq!(list, articles),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn from_fetch_error_is_visible() {
    let state = FeedState::from_fetch(Some(Err(ApiError::Transport("offline".to_owned()))));
    assert_eq!(state, FeedState::Failed("Could not load articles: network error: offline".to_owned()));
}
