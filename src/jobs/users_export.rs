use std::collections::HashMap;
use serde::Deserialize;
use serde::Serialize;

/// The fields to export, as groups of `{"name": ..., "export_as": ...}` maps.
pub type Fields = Vec<Vec<HashMap<String, String>>>;

/// The body of a users export request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(default)]
    limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Fields>,
}

impl UsersExport {
    /// Create a new empty users export.
    pub fn new() -> UsersExport {
        UsersExport::default()
    }

    /// Create a new users export with all its attributes.
    pub fn with(connection_id: String, format: String, limit: i32, fields: Fields) -> UsersExport {
        UsersExport {
            connection_id: Some(connection_id),
            format: Some(format),
            limit: limit,
            fields: Some(fields),
        }
    }

    pub fn get_connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// Set the identifier of the connection to export users from.
    pub fn set_connection_id(&mut self, connection_id: String) {
        self.connection_id = Some(connection_id);
    }

    pub fn get_format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Set the file format of the export, either "csv" or "json".
    pub fn set_format(&mut self, format: String) {
        self.format = Some(format);
    }

    pub fn get_limit(&self) -> i32 {
        self.limit
    }

    /// Set the maximum number of users to export.
    pub fn set_limit(&mut self, limit: i32) {
        self.limit = limit;
    }

    pub fn get_fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    pub fn set_fields(&mut self, fields: Fields) {
        self.fields = Some(fields);
    }
}
