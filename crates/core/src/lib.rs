pub mod config;
pub mod error;
pub mod logging;
pub mod model;

pub use config::{AfterExecute, CacheConfig, CatalogConfig, Config, ConfigError, NavigatorConfig};
pub use error::{CatalogError, Error, Result};
pub use logging::{LogFormat, LoggingConfig, init_logging};
pub use model::{Candidate, CandidateId, ExecuteRequest, IconKind, PaneIndex, Parent, QueryKey};
