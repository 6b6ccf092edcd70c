//! Job records of the Auth0 Management API.
//!
//! This crate provides the value types exchanged with the jobs endpoints, and their JSON
//! mapping. It doesn't perform any network call: records are decoded from, and encoded into,
//! payloads obtained elsewhere.
//!
//! ```
//! use auth0_mgmt_jobs::jobs::Job;
//! use auth0_mgmt_jobs::json;
//!
//! let job: Job = json::from_json(r#"{"status": "pending", "type": "users_export", "id": "job_1"}"#).unwrap();
//! assert_eq!(job.get_status(), Some("pending"));
//! ```

pub mod jobs;
pub mod json;
