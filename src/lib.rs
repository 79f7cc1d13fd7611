//! Experimental library for importing BVH motion capture data
//!
//! The `mocap_import` module parses the text of a BVH file into a skeleton
//! and an animation clip. The `animation` module holds the output types
//! along with utilities for sampling poses from a clip.

pub mod animation;
pub mod mocap_import;
