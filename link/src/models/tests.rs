use serde_json::json;

use super::*;
use crate::error::JobLinkError;

// ==================== Job Tests ====================

#[test]
fn test_job_deserializes_service_shape() {
    let value = json!({
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "company": "Acme",
        "role": "Engineer",
        "status": "Interview",
        "applicationDate": "2024-01-05T00:00:00.000Z",
        "link": "https://acme.example/jobs/1",
        "__v": 0
    });

    let job: Job = serde_json::from_value(value).unwrap();
    assert_eq!(job.id, Some(JobId::new("65a1f0c2e4b0a1b2c3d4e5f6")));
    assert_eq!(job.status, JobStatus::Interview);
    assert_eq!(job.application_date, "2024-01-05T00:00:00.000Z");
    assert_eq!(job.link.as_deref(), Some("https://acme.example/jobs/1"));
}

#[test]
fn test_job_accepts_plain_id_alias() {
    let value = json!({
        "id": "7",
        "company": "Acme",
        "role": "Engineer",
        "status": "Applied",
        "applicationDate": "2024-01-05"
    });

    let job: Job = serde_json::from_value(value).unwrap();
    assert_eq!(job.id, Some(JobId::new("7")));
    assert!(job.link.is_none(), "missing link should be None");
}

#[test]
fn test_job_empty_link_is_none() {
    let value = json!({
        "_id": "1",
        "company": "Acme",
        "role": "Engineer",
        "status": "Applied",
        "applicationDate": "2024-01-05",
        "link": ""
    });

    let job: Job = serde_json::from_value(value).unwrap();
    assert!(job.link.is_none());
}

#[test]
fn test_job_rejects_unknown_status() {
    let value = json!({
        "_id": "1",
        "company": "Acme",
        "role": "Engineer",
        "status": "Ghosted",
        "applicationDate": "2024-01-05"
    });

    let result: Result<Job, _> = serde_json::from_value(value);
    assert!(result.is_err(), "status outside the closed set must be rejected");
}

#[test]
fn test_job_serializes_wire_names() {
    let job = Job {
        id: Some(JobId::new("1")),
        company: "Acme".into(),
        role: "Engineer".into(),
        status: JobStatus::Offer,
        application_date: "2024-01-05".into(),
        link: None,
    };

    let value = serde_json::to_value(&job).unwrap();
    assert_eq!(value["_id"], "1");
    assert_eq!(value["applicationDate"], "2024-01-05");
    assert_eq!(value["status"], "Offer");
    assert!(value.get("link").is_none());
}

// ==================== JobStatus Tests ====================

#[test]
fn test_status_from_str_is_case_insensitive() {
    assert_eq!("interview".parse::<JobStatus>().unwrap(), JobStatus::Interview);
    assert_eq!(" OFFER ".parse::<JobStatus>().unwrap(), JobStatus::Offer);
    assert!("all".parse::<JobStatus>().is_err());
}

#[test]
fn test_status_display_matches_wire() {
    for status in JobStatus::ALL {
        let wire = serde_json::to_value(status).unwrap();
        assert_eq!(wire, status.to_string());
    }
}

// ==================== Date Parsing Tests ====================

#[test]
fn test_parse_application_date_formats() {
    let plain = parse_application_date("2024-01-05").unwrap();
    let rfc = parse_application_date("2024-01-05T00:00:00.000Z").unwrap();
    let naive = parse_application_date("2024-01-05T00:00:00").unwrap();
    assert_eq!(plain, rfc);
    assert_eq!(plain, naive);
    assert!(parse_application_date("last tuesday").is_none());
}

// ==================== JobUpdate Tests ====================

#[test]
fn test_update_skips_unset_fields() {
    let update = JobUpdate::status(JobStatus::Rejected);
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, json!({ "status": "Rejected" }));
}

#[test]
fn test_update_apply_to_merges_in_place() {
    let mut job = Job {
        id: Some(JobId::new("1")),
        company: "Acme".into(),
        role: "Engineer".into(),
        status: JobStatus::Applied,
        application_date: "2024-01-02".into(),
        link: Some("https://acme.example".into()),
    };

    JobUpdate::new()
        .with_status(JobStatus::Interview)
        .with_role("Senior Engineer")
        .apply_to(&mut job);

    assert_eq!(job.status, JobStatus::Interview);
    assert_eq!(job.role, "Senior Engineer");
    assert_eq!(job.company, "Acme");
    assert_eq!(job.application_date, "2024-01-02");
    assert_eq!(job.link.as_deref(), Some("https://acme.example"));
}

// ==================== NewJob Tests ====================

#[test]
fn test_new_job_validation() {
    let ok = NewJob::new("Acme", "Eng", JobStatus::Applied, "2024-02-01");
    assert!(ok.validate().is_ok());

    let blank_company = NewJob::new("  ", "Eng", JobStatus::Applied, "2024-02-01");
    assert!(matches!(
        blank_company.validate(),
        Err(JobLinkError::ValidationError(_))
    ));

    let blank_role = NewJob::new("Acme", "", JobStatus::Applied, "2024-02-01");
    assert!(blank_role.validate().is_err());

    let bad_date = NewJob::new("Acme", "Eng", JobStatus::Applied, "02/01/2024");
    assert!(bad_date.validate().is_err());
}

#[test]
fn test_new_job_with_blank_link() {
    let job = NewJob::new("Acme", "Eng", JobStatus::Applied, "2024-02-01").with_link("");
    assert!(job.link.is_none());

    let value = serde_json::to_value(&job).unwrap();
    assert!(value.get("_id").is_none());
    assert!(value.get("link").is_none());
}

// ==================== Misc Tests ====================

#[test]
fn test_error_detail_message_preference() {
    let detail: ErrorDetail =
        serde_json::from_value(json!({ "message": "Job not found", "error": "x" })).unwrap();
    assert_eq!(detail.into_message().as_deref(), Some("Job not found"));

    let detail: ErrorDetail = serde_json::from_value(json!({ "error": "Bad id" })).unwrap();
    assert_eq!(detail.into_message().as_deref(), Some("Bad id"));

    let detail: ErrorDetail = serde_json::from_value(json!({})).unwrap();
    assert!(detail.into_message().is_none());
}

#[test]
fn test_connection_options_default() {
    let opts = ConnectionOptions::default();
    assert_eq!(opts.http_version, HttpVersion::Http1);
    assert_eq!(opts.pool_max_idle_per_host, 10);
    assert_eq!(opts.pool_idle_timeout_secs, 90);
}

#[test]
fn test_http_version_parsing() {
    assert_eq!("HTTP/1.1".parse::<HttpVersion>().unwrap(), HttpVersion::Http1);
    assert_eq!("http2".parse::<HttpVersion>().unwrap(), HttpVersion::Http2);
    assert_eq!("auto".parse::<HttpVersion>().unwrap(), HttpVersion::Auto);
    assert!("http3".parse::<HttpVersion>().is_err());
}
