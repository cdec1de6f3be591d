pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod input;
pub mod modal;
pub mod motion;
pub mod particles;
pub mod scheduler;

pub use config::*;
pub use effects::{Capabilities, Effect, Supervisor};
pub use error::{guard, SetupError};
pub use input::*;
pub use modal::*;
pub use particles::*;
pub use scheduler::*;
