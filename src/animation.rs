pub mod util;
mod types;

// Re-exports
pub use types::{
    Bone, BonePose, Clip, Keyframe, Skeleton, Track, TrackProperty,
};
