//! Records of the Management API jobs endpoints.
//!
//! Jobs are long running operations executed by the API on behalf of a client, such as bulk
//! users imports or exports. This module only holds their data: a [`Job`] is the read-only view
//! of a job returned by the API, and a [`UsersExport`] is the body sent to request an export.

pub mod job;
pub mod summary;
pub mod users_export;

pub use job::Job;
pub use summary::Summary;
pub use users_export::UsersExport;
