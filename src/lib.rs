pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod event;
pub mod locale;
pub mod matching;
pub mod persistence;
pub mod resolve;
pub mod select;

pub use config::Config;
pub use error::{WdayError, WdayResult};
pub use event::{Event, Frequency};
pub use locale::Locale;
pub use persistence::EventCache;
pub use resolve::{MatchPrecision, ResolvedAnchor};
