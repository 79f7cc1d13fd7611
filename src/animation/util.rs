use super::types::{BonePose, Clip, Skeleton, Track, TrackProperty};
use itertools::Itertools;
use log::debug;
use nalgebra_glm as glm;

/// Helper to calculate the parameter used for interpolation
fn weight(start: f32, end: f32, current: f32) -> f32 {
    const EPSILON: f32 = 0.0005;
    ((current - start) / (end - start).max(EPSILON)).clamp(0.0f32, 1.0f32)
}

/// Helper to find the position of a track at an arbitrary timestamp
fn find_position(
    track: &Track,
    initial_data: &glm::Vec3,
    current_time: f32,
) -> glm::Vec3 {
    let mut frame = (0.0_f32, *initial_data);
    for (time, (x, y, z)) in
        track.times.iter().zip(track.values.iter().tuples())
    {
        let data = glm::vec3(*x, *y, *z);
        if *time <= current_time {
            // This sample is at or before the current time, so make it
            // the new candidate.
            frame = (*time, data);
        } else {
            // This sample is later than the current time, so blend
            // between the candidate and this sample.
            return glm::lerp(
                &frame.1,
                &data,
                weight(frame.0, *time, current_time),
            );
        }
    }
    // Fall through past the end of the track so return the candidate
    frame.1
}

/// Helper to find the rotation of a track at an arbitrary timestamp
fn find_rotation(
    track: &Track,
    initial_data: &glm::Quat,
    current_time: f32,
) -> glm::Quat {
    let mut frame = (0.0_f32, *initial_data);
    for (time, (x, y, z, w)) in
        track.times.iter().zip(track.values.iter().tuples())
    {
        let data = glm::quat(*x, *y, *z, *w);
        if *time <= current_time {
            frame = (*time, data);
        } else {
            return glm::quat_slerp(
                &frame.1,
                &data,
                weight(frame.0, *time, current_time),
            );
        }
    }
    frame.1
}

/// Returns the local pose of every bone at an arbitrary timestamp. Poses
/// are index aligned with the skeleton's bone list. Bones without track
/// coverage stay in the rest pose. Interpolation is linear and clamps at
/// both ends of each track.
#[must_use]
pub fn sample(
    skeleton: &Skeleton,
    clip: &Clip,
    current_time: f32,
) -> Vec<BonePose> {
    // Rest pose for every bone. Tracks override from here.
    let mut poses: Vec<BonePose> = skeleton
        .bones
        .iter()
        .map(|bone| BonePose {
            position: bone.offset,
            rotation: glm::Quat::identity(),
        })
        .collect();

    for track in &clip.tracks {
        let Some(bone_index) = skeleton.bone_index(&track.bone) else {
            debug!("track bone {} not in skeleton", track.bone);
            continue;
        };
        if track.times.is_empty() {
            continue;
        }
        let pose = &mut poses[bone_index];
        match track.property {
            TrackProperty::Position => {
                pose.position =
                    find_position(track, &pose.position, current_time);
            }
            TrackProperty::Rotation => {
                pose.rotation =
                    find_rotation(track, &pose.rotation, current_time);
            }
        }
    }
    poses
}

/// Composes local poses into world space. Bones are stored parent first so
/// a parent pose is always composed before the poses of its children.
#[must_use]
pub fn global_poses(skeleton: &Skeleton, local: &[BonePose]) -> Vec<BonePose> {
    let mut output: Vec<BonePose> = Vec::with_capacity(local.len());
    for (bone, pose) in skeleton.bones.iter().zip(local) {
        let world = bone.parent.map_or(*pose, |parent_index| {
            let parent = &output[parent_index];
            BonePose {
                position: parent.position
                    + glm::quat_rotate_vec3(&parent.rotation, &pose.position),
                rotation: parent.rotation * pose.rotation,
            }
        });
        output.push(world);
    }
    output
}
