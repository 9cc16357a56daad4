pub mod failures;
pub mod records;
pub mod urls;

pub use failures::FailureLog;
pub use records::{format_tags, PostRow, RecordStore};
pub use urls::UrlList;
