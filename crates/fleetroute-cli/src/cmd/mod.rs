pub mod optimize;
pub mod samples;
