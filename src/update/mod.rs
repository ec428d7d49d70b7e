pub mod sprint;
pub mod workflow;

pub use sprint::update_story_status;
pub use workflow::update_item_status;
