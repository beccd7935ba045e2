mod driver;
mod engine;
mod mode;
mod ports;
mod snapshot;

pub use driver::TickDriver;
pub use engine::TimerEngine;
pub use mode::Mode;
pub use ports::{NotificationPort, NullNotifier, NullPresenter, Presenter};
pub use snapshot::{format_clock, Snapshot};
