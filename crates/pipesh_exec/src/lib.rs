mod dispatch;
mod error;
mod external;
mod io;
mod spawn;

pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use external::ExternalDispatcher;
pub use io::{StageIoError, StdinSource, StdoutSink, WriteMode};
pub use spawn::{spawn_stage, wait_stage, SpawnError};
