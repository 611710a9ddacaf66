pub mod draft;
pub mod energy;
pub mod entry;
pub mod rows;
pub mod session_type;

pub use draft::EntryDraft;
pub use energy::EnergyAfter;
pub use entry::SessionEntry;
pub use rows::{NewSession, NewTask, SessionRow, SessionWithTasks, TaskRow};
pub use session_type::SessionType;
