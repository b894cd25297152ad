pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod logs;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use logs::LogCapture;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::auth::factory, LogCapture, TestBuilder, TestError, TestSetup};
}
