//! Store behavior end-to-end over HTTP, against a mock jobs service.
//!
//! Run with: cargo test --test test_store_http

mod common;

use job_link::{JobId, JobStatus, JobStore, JobUpdate, MutationKind, NewJob, StoreError};
use serde_json::json;
use common::{client_for, job_json, mock_json, mock_service, two_jobs_json};

#[tokio::test]
async fn test_refresh_sorts_and_caches() {
    let mut server = mock_service().await;
    let _list = mock_json(&mut server, "GET", "/jobs", 200, &two_jobs_json()).await;

    let store = JobStore::new(client_for(&server));
    store.refresh().await.unwrap();

    let ids: Vec<_> = store.jobs().into_iter().filter_map(|j| j.id).collect();
    assert_eq!(ids, vec![JobId::new("2"), JobId::new("1")]);
}

#[tokio::test]
async fn test_load_error_keeps_previous_data() {
    let mut server = mock_service().await;
    let list = mock_json(&mut server, "GET", "/jobs", 200, &two_jobs_json()).await;

    let store = JobStore::new(client_for(&server));
    store.refresh().await.unwrap();
    let before = store.cached();

    list.remove_async().await;
    let _broken = mock_json(&mut server, "GET", "/jobs", 500, &json!({ "message": "boom" })).await;

    let err = store.refresh().await.unwrap_err();
    assert!(matches!(err, StoreError::Load(_)));
    assert_eq!(store.cached(), before);
}

#[tokio::test]
async fn test_failed_update_rolls_back_without_refetch() {
    let mut server = mock_service().await;
    let list = server
        .mock("GET", "/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(two_jobs_json().to_string())
        .expect(1)
        .create_async()
        .await;
    let put = mock_json(&mut server, "PUT", "/jobs/1", 500, &json!({ "message": "db down" })).await;

    let store = JobStore::new(client_for(&server));
    store.refresh().await.unwrap();
    let before = store.cached();

    let err = store
        .update(JobId::new("1"), JobUpdate::status(JobStatus::Interview))
        .await
        .unwrap_err();

    put.assert_async().await;
    list.assert_async().await;
    assert!(matches!(
        err,
        StoreError::Mutation {
            kind: MutationKind::Update,
            ..
        }
    ));
    assert_eq!(store.cached(), before);
    assert_eq!(
        store.get(&JobId::new("1")).unwrap().status,
        JobStatus::Applied
    );
}

#[tokio::test]
async fn test_create_then_reconciling_refresh() {
    let mut server = mock_service().await;
    let list = mock_json(&mut server, "GET", "/jobs", 200, &two_jobs_json()).await;

    let store = JobStore::new(client_for(&server));
    store.refresh().await.unwrap();

    let created = job_json("3", "Acme", "Applied", "2024-02-01");
    let post = mock_json(&mut server, "POST", "/jobs", 201, &created).await;
    list.remove_async().await;
    let _after = mock_json(
        &mut server,
        "GET",
        "/jobs",
        200,
        &json!([
            job_json("1", "Acme", "Applied", "2024-01-02T00:00:00.000Z"),
            job_json("2", "Globex", "Offer", "2024-01-05T00:00:00.000Z"),
            created,
        ]),
    )
    .await;

    let job = store
        .create(NewJob::new("Acme", "Eng", JobStatus::Applied, "2024-02-01"))
        .await
        .unwrap();

    post.assert_async().await;
    assert_eq!(job.id, Some(JobId::new("3")));
    let jobs = store.jobs();
    assert_eq!(jobs.len(), 3);
    assert_eq!(jobs[0].id, Some(JobId::new("3")));
}

#[tokio::test]
async fn test_delete_then_refresh_confirms_absence() {
    let mut server = mock_service().await;
    let list = mock_json(&mut server, "GET", "/jobs", 200, &two_jobs_json()).await;

    let store = JobStore::new(client_for(&server));
    store.refresh().await.unwrap();

    let delete = mock_json(
        &mut server,
        "DELETE",
        "/jobs/2",
        200,
        &json!({ "message": "Job deleted" }),
    )
    .await;
    list.remove_async().await;
    let _after = mock_json(
        &mut server,
        "GET",
        "/jobs",
        200,
        &json!([job_json("1", "Acme", "Applied", "2024-01-02T00:00:00.000Z")]),
    )
    .await;

    store.delete(JobId::new("2")).await.unwrap();
    delete.assert_async().await;
    assert!(store.get(&JobId::new("2")).is_none());

    store.refresh().await.unwrap();
    assert!(store.get(&JobId::new("2")).is_none());
    assert_eq!(store.jobs().len(), 1);
}
