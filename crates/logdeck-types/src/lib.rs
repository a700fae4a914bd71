pub mod content;
pub mod event;
pub mod session;
pub mod tag;

pub use content::*;
pub use event::*;
pub use session::*;
pub use tag::*;
