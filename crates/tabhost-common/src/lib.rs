pub mod context;
pub mod errors;
pub mod events;
pub mod id;
pub mod types;
pub mod util;

pub use context::ExtensionContext;
pub use errors::{CommonError, ConfigError, ControlError, TabhostError};
pub use events::{Event, EventBus};
pub use id::{generate_id, new_id};
pub use types::{ButtonPosition, SurfaceId, WindowId};
pub use util::{assert_not_null, require, sleep};

pub type Result<T> = std::result::Result<T, TabhostError>;
