pub mod audit;
pub mod book;
pub mod session;

pub use audit::AuditEvent;
pub use book::{BookRecord, Catalog};
pub use session::{SessionState, Status};
