pub mod domain;
pub mod ports;

pub use domain::{Chapter, ChapterProgress, Course, Purchase, VisitorSession};
pub use ports::{CatalogStore, PortError, PortResult, SessionProvider};
