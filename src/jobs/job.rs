use chrono::DateTime;
use chrono::offset::Utc;
use serde::Deserialize;
use serde::Serialize;
use crate::json::date;
use super::summary::Summary;

/// The wire shape of a job, as sent by the Management API. It is the only way to build a job
/// from outside this crate.
#[derive(Deserialize)]
struct Payload {
    status: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default, with = "date")]
    created_at: Option<DateTime<Utc>>,
    id: Option<String>,
    connection_id: Option<String>,
    connection: Option<String>,
    format: Option<String>,
    location: Option<String>,
    percentage_done: Option<i32>,
    time_left_seconds: Option<i32>,
    external_id: Option<String>,
    summary: Option<Summary>,
}

/// A job of the Management API, such as a users import or a users export.
///
/// A job is immutable: it is built once, from the payload returned by the jobs endpoints, and
/// only read afterwards. Every attribute is optional, the API omitting the ones that do not apply
/// to the job type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Payload")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(with = "date", skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    percentage_done: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_left_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<Summary>,
}

impl Job {
    /// Create a new job with the given status, type and identifier. Every other attribute,
    /// including the creation datetime, is left unset.
    pub(crate) fn new(status: Option<String>, kind: Option<String>, id: Option<String>) -> Job {
        Job {
            status: status,
            kind: kind,
            created_at: None,
            id: id,
            connection_id: None,
            connection: None,
            format: None,
            location: None,
            percentage_done: None,
            time_left_seconds: None,
            external_id: None,
            summary: None,
        }
    }

    /// Get the status of this job (e.g. "pending", "completed" or "failed").
    pub fn get_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Get the type of this job (e.g. "users_import" or "users_export").
    pub fn get_type(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Get the creation datetime of this job.
    pub fn get_created_at(&self) -> Option<&DateTime<Utc>> {
        self.created_at.as_ref()
    }

    /// Get the identifier of this job, assigned by the API.
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Get the identifier of the connection this job uses.
    pub fn get_connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// Get the name of the connection this job uses.
    pub fn get_connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    /// Get the file format of this job (export jobs only).
    pub fn get_format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Get the URL to download the result of this job.
    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Get the completion percentage of this job.
    pub fn get_percentage_done(&self) -> Option<i32> {
        self.percentage_done
    }

    /// Get the estimated time left, in seconds, before this job completes.
    pub fn get_time_left_seconds(&self) -> Option<i32> {
        self.time_left_seconds
    }

    pub fn get_external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// Get the summary of this job (import jobs only).
    pub fn get_summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
}

impl From<Payload> for Job {
    fn from(payload: Payload) -> Job {
        let mut job = Job::new(payload.status, payload.kind, payload.id);
        job.created_at = payload.created_at;
        job.connection_id = payload.connection_id;
        job.connection = payload.connection;
        job.format = payload.format;
        job.location = payload.location;
        job.percentage_done = payload.percentage_done;
        job.time_left_seconds = payload.time_left_seconds;
        job.external_id = payload.external_id;
        job.summary = payload.summary;

        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::offset::TimeZone;
    use crate::json::from_json;
    use crate::json::to_json;

    const JSON: &str = "{\"status\": \"completed\",\"type\": \"verification_email\",\"created_at\": \"2016-02-23T19:57:29.532Z\",\"id\": \"job_0000000000000001\"}";
    const READ_ONLY_JSON: &str = "{\"status\": \"completed\",\"type\": \"verification_email\",\"created_at\": \"2016-02-23T19:57:29.532Z\",\"id\": \"job_0000000000000001\", \"connection_id\": \"conn_1\", \"connection\": \"Custom-DB-Connection\", \"format\": \"csv\", \"location\": \"https://auth0.com/jobs/\", \"percentage_done\": 89, \"time_left_seconds\": 9814, \"summary\":{\"failed\":2,\"updated\":1,\"inserted\":3,\"total\":6}, \"external_id\": \"ext_id123\"}";

    fn job(status: &str, kind: &str, id: &str) -> Job {
        Job::new(Some(String::from(status)), Some(String::from(kind)), Some(String::from(id)))
    }

    #[test]
    fn new_leaves_created_at_unset() {
        let job = job("pending", "users_import", "job_123");

        assert_eq!(job.get_status(), Some("pending"));
        assert_eq!(job.get_type(), Some("users_import"));
        assert_eq!(job.get_id(), Some("job_123"));
        assert_eq!(job.get_created_at(), None);
        assert_eq!(job.get_connection_id(), None);
        assert_eq!(job.get_percentage_done(), None);
        assert_eq!(job.get_summary(), None);
    }

    #[test]
    fn accessors_are_idempotent() {
        let job = job("failed", "users_export", "job_1");

        assert_eq!(job.get_status(), job.get_status());
        assert_eq!(job.get_type(), job.get_type());
        assert_eq!(job.get_id(), job.get_id());
        assert_eq!(job.get_created_at(), job.get_created_at());
    }

    #[test]
    fn empty_values_are_kept() {
        let job = job("", "", "");

        assert_eq!(job.get_status(), Some(""));
        assert_eq!(job.get_type(), Some(""));
        assert_eq!(job.get_id(), Some(""));
    }

    #[test]
    fn identical_inputs_are_equal() {
        assert_eq!(
            job("pending", "users_export", "job_1"),
            job("pending", "users_export", "job_1"),
        );
        assert_ne!(
            job("pending", "users_export", "job_1"),
            job("pending", "users_export", "job_2"),
        );
    }

    #[test]
    fn deserialize() {
        let job: Job = from_json(JSON).unwrap();

        assert_eq!(job.get_id(), Some("job_0000000000000001"));
        assert_eq!(job.get_status(), Some("completed"));
        assert_eq!(job.get_type(), Some("verification_email"));
        assert_eq!(
            job.get_created_at(),
            Some(&Utc.ymd(2016, 2, 23).and_hms_milli(19, 57, 29, 532)),
        );
        assert_eq!(job.get_location(), None);
    }

    #[test]
    fn deserialize_without_created_at() {
        let job: Job = from_json("{\"status\": \"complete\", \"type\": \"users_export\", \"id\": \"job_123\"}").unwrap();

        assert_eq!(job, self::job("complete", "users_export", "job_123"));
        assert_eq!(job.get_created_at(), None);
    }

    #[test]
    fn deserialize_read_only_values() {
        let job: Job = from_json(READ_ONLY_JSON).unwrap();

        assert_eq!(job.get_id(), Some("job_0000000000000001"));
        assert_eq!(job.get_status(), Some("completed"));
        assert_eq!(job.get_type(), Some("verification_email"));
        assert_eq!(
            job.get_created_at(),
            Some(&Utc.ymd(2016, 2, 23).and_hms_milli(19, 57, 29, 532)),
        );
        assert_eq!(job.get_format(), Some("csv"));
        assert_eq!(job.get_connection(), Some("Custom-DB-Connection"));
        assert_eq!(job.get_connection_id(), Some("conn_1"));
        assert_eq!(job.get_location(), Some("https://auth0.com/jobs/"));
        assert_eq!(job.get_percentage_done(), Some(89));
        assert_eq!(job.get_time_left_seconds(), Some(9814));
        assert_eq!(job.get_external_id(), Some("ext_id123"));

        let summary = job.get_summary().unwrap();
        assert_eq!(summary.get_failed(), Some(2));
        assert_eq!(summary.get_updated(), Some(1));
        assert_eq!(summary.get_inserted(), Some(3));
        assert_eq!(summary.get_total(), Some(6));
    }

    #[test]
    fn deserialize_ignores_unknown_fields_and_nulls() {
        let job: Job = from_json("{\"id\": \"job_1\", \"status\": null, \"created_at\": \"\", \"unknown\": [1, 2]}").unwrap();

        assert_eq!(job.get_id(), Some("job_1"));
        assert_eq!(job.get_status(), None);
        assert_eq!(job.get_created_at(), None);
    }

    #[test]
    fn deserialize_invalid_created_at() {
        let result: Result<Job, _> = from_json("{\"id\": \"job_1\", \"created_at\": \"23/02/2016\"}");

        assert!(result.is_err());
    }

    #[test]
    fn serialize_omits_unset_values() {
        let json = to_json(&job("pending", "users_export", "job_1")).unwrap();

        assert_eq!(json, "{\"status\":\"pending\",\"type\":\"users_export\",\"id\":\"job_1\"}");
    }

    #[test]
    fn serialize_created_at() {
        let job: Job = from_json(JSON).unwrap();
        let json = to_json(&job).unwrap();

        assert_eq!(
            json,
            "{\"status\":\"completed\",\"type\":\"verification_email\",\"created_at\":\"2016-02-23T19:57:29.532Z\",\"id\":\"job_0000000000000001\"}",
        );
    }
}
