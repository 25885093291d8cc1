//! Result records and the result set
//!
//! A record is one hit from the search collaborator; the set holds the
//! ordered hits for the query currently shown.

mod record;
mod set;

pub use record::{ResultRecord, DEFAULT_POST_TYPE};
pub use set::ResultSet;
