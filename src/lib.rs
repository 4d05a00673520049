pub mod bounds;
pub mod drawing;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod recording;
pub mod skeletons;
pub mod types;
