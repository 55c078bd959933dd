// Mon Oct 19 2026 - Alex

pub mod attr;
pub mod builder;
pub mod error;
pub mod intersect;
pub mod native;
pub mod rule;

pub use attr::AttrValue;
pub use builder::AlignmentBuilder;
pub use error::{AlignmentError, ErrorKind};
pub use native::PedAlignment;
pub use rule::Alignment;
