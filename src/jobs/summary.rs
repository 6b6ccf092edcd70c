use serde::Deserialize;
use serde::Serialize;

/// The counts reported by a users import job once it is processed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    failed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inserted: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<i32>,
}

impl Summary {
    /// Get the number of users that failed to be imported.
    pub fn get_failed(&self) -> Option<i32> {
        self.failed
    }

    /// Get the number of existing users that got updated.
    pub fn get_updated(&self) -> Option<i32> {
        self.updated
    }

    /// Get the number of users that got created.
    pub fn get_inserted(&self) -> Option<i32> {
        self.inserted
    }

    /// Get the total number of users processed.
    pub fn get_total(&self) -> Option<i32> {
        self.total
    }
}
