pub mod daily;
pub mod error;
pub mod progress;
pub mod world;
pub mod zones;

pub use daily::*;
pub use error::CodeQuestError;
pub use progress::*;
pub use world::*;
pub use zones::*;
