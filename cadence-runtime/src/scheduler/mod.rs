mod builder;
mod scheduler;

pub use builder::SchedulerBuilder;
pub use scheduler::{Action, DeltaOf, Scheduler, TimeOf};
