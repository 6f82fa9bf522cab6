// Shared types for the occupational health exam engine
pub mod error;
pub mod findings;
pub mod level;
pub mod metric;
pub mod record;
pub mod sex;

pub use error::*;
pub use findings::*;
pub use level::*;
pub use metric::*;
pub use record::*;
pub use sex::*;
