pub mod common;
pub mod files;
pub mod next;
pub mod set;
pub mod status;
pub mod workflow;
