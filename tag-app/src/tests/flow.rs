use crate::tests::{MockTagService, harness};
use crate::{AppError, QueryKey, TAG_CREATED_MESSAGE, fetch_tags};

use googletest::prelude::*;
use tag_core::{Tag, TagId, TagName};

fn tag(id: u64, title: &str) -> Tag {
    Tag {
        id: TagId::Number(id),
        title: title.to_string(),
        slug: tag_core::derive_slug(title),
        amount_of_videos: 0,
    }
}

#[tokio::test]
async fn given_valid_name_when_create_tag_then_request_carries_title_slug_and_zero_videos() {
    // Given
    let h = harness(MockTagService::default());
    let name = TagName::parse("Café  Culture").unwrap();

    // When
    h.flow.create_tag(&name).await.unwrap();

    // Then
    let requests = h.service.requests.lock().unwrap().clone();
    assert_that!(requests.len(), eq(1));
    assert_that!(requests[0].title, eq("Café  Culture"));
    assert_that!(requests[0].slug, eq("cafe-culture"));
    assert_that!(requests[0].amount_of_videos, eq(0));
}

#[tokio::test]
async fn given_successful_request_when_create_tag_then_invalidates_once_and_notifies() {
    // Given
    let h = harness(MockTagService::default());
    let name = TagName::parse("Rust Tips").unwrap();

    // When
    h.flow.create_tag(&name).await.unwrap();

    // Then
    assert_that!(h.queries.invalidation_count(&QueryKey::tags()).await, eq(1));
    assert_eq!(h.notifier.messages(), [TAG_CREATED_MESSAGE]);
}

#[tokio::test]
async fn given_failing_transport_when_create_tag_then_no_invalidation_and_no_toast() {
    // Given
    let h = harness(MockTagService {
        fail: true,
        ..MockTagService::default()
    });
    let name = TagName::parse("Rust Tips").unwrap();

    // When
    let result = h.flow.create_tag(&name).await;

    // Then
    assert!(matches!(result, Err(AppError::Client(_))));
    assert_that!(h.service.create_count(), eq(1));
    assert_that!(h.queries.invalidation_count(&QueryKey::tags()).await, eq(0));
    assert_that!(h.notifier.messages(), is_empty());
}

#[tokio::test]
async fn given_cached_tag_list_when_tag_created_then_next_read_refetches() {
    // Given
    let h = harness(MockTagService {
        tags: vec![tag(1, "Rust")],
        ..MockTagService::default()
    });
    let first = fetch_tags(&h.queries, h.service.as_ref()).await.unwrap();
    let cached = fetch_tags(&h.queries, h.service.as_ref()).await.unwrap();
    assert_that!(h.service.list_count(), eq(1));
    assert_eq!(cached, first);

    // When
    h.flow
        .create_tag(&TagName::parse("Go Basics").unwrap())
        .await
        .unwrap();

    // Then
    assert!(h.queries.is_stale(&QueryKey::tags()).await);
    fetch_tags(&h.queries, h.service.as_ref()).await.unwrap();
    assert_that!(h.service.list_count(), eq(2));
    assert!(!h.queries.is_stale(&QueryKey::tags()).await);
}

#[tokio::test]
async fn given_failing_transport_when_create_tag_then_cached_list_stays_fresh() {
    // Given
    let h = harness(MockTagService {
        fail: true,
        ..MockTagService::default()
    });
    h.queries
        .set_query_data(&QueryKey::tags(), vec![tag(1, "Rust")])
        .await;

    // When
    let _ = h
        .flow
        .create_tag(&TagName::parse("Go Basics").unwrap())
        .await;

    // Then
    assert!(!h.queries.is_stale(&QueryKey::tags()).await);
}
