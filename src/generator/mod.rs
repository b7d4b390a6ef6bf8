pub mod compose;
pub mod context;
pub mod outlet;
pub mod progress;
pub mod research;
pub mod workflow;
