mod session_rng;
mod tick_scheduler;

pub mod snake;

pub use session_rng::SessionRng;
pub use tick_scheduler::TickScheduler;
