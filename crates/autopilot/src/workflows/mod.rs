pub mod apply_pack;
pub mod directory;
pub mod jobs;
pub mod outreach;
pub mod summary;
