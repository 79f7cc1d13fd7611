use super::types::{BindingWarning, FormatError, ImportOptions, MocapLoaded};
use crate::animation::{Bone, Clip, Keyframe, Skeleton, Track, TrackProperty};
use log::{debug, info, trace, warn};
use nalgebra_glm as glm;
use smallvec::SmallVec;

/// Name given to end sites, which have none of their own in the file
const END_SITE_NAME: &str = "ENDSITE";

/// Name given to the clip. A BVH file holds a single unnamed animation.
const CLIP_NAME: &str = "animation";

const LINE_BREAKS: &[char] = &['\r', '\n'];

/// One animated degree of freedom declared on a CHANNELS line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Channel {
    Xposition,
    Yposition,
    Zposition,
    Xrotation,
    Yrotation,
    Zrotation,
}

impl Channel {
    // Tags are matched case sensitively
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Xposition" => Some(Self::Xposition),
            "Yposition" => Some(Self::Yposition),
            "Zposition" => Some(Self::Zposition),
            "Xrotation" => Some(Self::Xrotation),
            "Yrotation" => Some(Self::Yrotation),
            "Zrotation" => Some(Self::Zrotation),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum JointKind {
    Root,
    Joint,
    EndSite,
}

/// A node of the parsed hierarchy along with its motion samples
#[derive(Clone, Debug)]
struct Joint {
    name: String,
    kind: JointKind,
    offset: glm::Vec3,
    channels: SmallVec<[Channel; 6]>,
    children: Vec<Joint>,
    frames: Vec<Keyframe>,
}

/// Cursor over the lines of the file. Splits on any mix of CR and LF and
/// skips blank lines.
struct Lines<'a> {
    inner: std::str::Split<'a, &'static [char]>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split(LINE_BREAKS),
        }
    }

    /// Returns the next line with content on it, trimmed
    fn next_significant(&mut self) -> Result<&'a str, FormatError> {
        for line in self.inner.by_ref() {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed);
            }
        }
        Err(FormatError::UnexpectedEnd)
    }
}

fn expect_keyword(line: &str, keyword: &'static str) -> Result<(), FormatError> {
    if line == keyword {
        Ok(())
    } else {
        Err(FormatError::Keyword {
            expected: keyword,
            found: line.to_string(),
        })
    }
}

fn integer(
    token: Option<&str>,
    expected: &'static str,
) -> Result<usize, FormatError> {
    let Some(token) = token else {
        return Err(FormatError::UnexpectedEnd);
    };
    token.parse().map_err(|_| FormatError::NotNumeric {
        expected,
        found: token.to_string(),
    })
}

// NaN is rejected because it would poison everything downstream
fn number(
    token: Option<&str>,
    expected: &'static str,
) -> Result<f32, FormatError> {
    let Some(token) = token else {
        return Err(FormatError::UnexpectedEnd);
    };
    let value: f32 = token.parse().map_err(|_| FormatError::NotNumeric {
        expected,
        found: token.to_string(),
    })?;
    if value.is_nan() {
        return Err(FormatError::NotNumeric {
            expected,
            found: token.to_string(),
        });
    }
    Ok(value)
}

/// Replaces the colons some exporters put in joint names so the names are
/// safe to use in binding paths
fn sanitize_name(name: &str) -> String {
    name.replace(':', "_")
}

// Parses an OFFSET line into a vector
fn read_offset(line: &str) -> Result<glm::Vec3, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens[0] != "OFFSET" {
        return Err(FormatError::Keyword {
            expected: "OFFSET",
            found: tokens[0].to_string(),
        });
    }
    if tokens.len() != 4 {
        return Err(FormatError::OffsetValues(tokens.len() - 1));
    }
    Ok(glm::vec3(
        number(tokens.get(1).copied(), "offset value")?,
        number(tokens.get(2).copied(), "offset value")?,
        number(tokens.get(3).copied(), "offset value")?,
    ))
}

// Parses a CHANNELS line. Unrecognized tags are reported and left out, so
// they never consume motion values.
fn read_channels(
    line: &str,
    name: &str,
    warnings: &mut Vec<BindingWarning>,
) -> Result<SmallVec<[Channel; 6]>, FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens[0] != "CHANNELS" {
        return Err(FormatError::Keyword {
            expected: "CHANNELS",
            found: tokens[0].to_string(),
        });
    }
    let declared = integer(tokens.get(1).copied(), "channel count")?;
    let present = tokens.len().saturating_sub(2);
    if present < declared {
        return Err(FormatError::ChannelValues { declared, present });
    }

    let mut channels = SmallVec::new();
    for tag in &tokens[2..2 + declared] {
        if let Some(channel) = Channel::from_tag(tag) {
            channels.push(channel);
        } else {
            warn!("joint {name} has unknown channel tag {tag}");
            warnings.push(BindingWarning::UnknownChannel {
                joint: name.to_string(),
                tag: (*tag).to_string(),
            });
        }
    }
    Ok(channels)
}

// Reads one node of the hierarchy and everything nested under it. The
// first line of the node has already been taken from the cursor. End sites
// are accepted in any letter case and hold nothing but an offset.
fn read_node(
    lines: &mut Lines,
    first_line: &str,
    warnings: &mut Vec<BindingWarning>,
) -> Result<Joint, FormatError> {
    let tokens: Vec<&str> = first_line.split_whitespace().collect();
    let node_type =
        tokens.first().copied().ok_or(FormatError::UnexpectedEnd)?;

    let (name, kind) = if node_type.eq_ignore_ascii_case("END")
        && tokens.get(1).is_some_and(|t| t.eq_ignore_ascii_case("SITE"))
    {
        // End sites have no name of their own
        (END_SITE_NAME.to_string(), JointKind::EndSite)
    } else {
        let kind = match node_type.to_ascii_uppercase().as_str() {
            "ROOT" => JointKind::Root,
            "JOINT" => JointKind::Joint,
            _ => return Err(FormatError::NodeType(node_type.to_string())),
        };
        let name = tokens
            .get(1)
            .copied()
            .ok_or_else(|| FormatError::MissingName(node_type.to_string()))?;
        (name.to_string(), kind)
    };

    expect_keyword(lines.next_significant()?, "{")?;
    let offset = read_offset(lines.next_significant()?)?;

    let mut children = Vec::new();
    let channels = if kind == JointKind::EndSite {
        expect_keyword(lines.next_significant()?, "}")?;
        SmallVec::new()
    } else {
        let channels =
            read_channels(lines.next_significant()?, &name, warnings)?;
        loop {
            let line = lines.next_significant()?;
            if line == "}" {
                break;
            }
            children.push(read_node(lines, line, warnings)?);
        }
        channels
    };

    Ok(Joint {
        name,
        kind,
        offset,
        channels,
        children,
        frames: Vec::new(),
    })
}

// Applies one frame of motion data to the tree, consuming values from the
// shared cursor in the same depth first order the joints were declared in.
// End sites take nothing from the frame. Rotation values are degrees and
// compose strictly in channel order.
fn read_frame_data(
    tokens: &[&str],
    cursor: &mut usize,
    time: f32,
    joint: &mut Joint,
    frame: usize,
) -> Result<(), FormatError> {
    if joint.kind == JointKind::EndSite {
        return Ok(());
    }

    let mut position = glm::Vec3::zeros();
    let mut rotation = glm::Quat::identity();

    for channel in &joint.channels {
        let token = tokens
            .get(*cursor)
            .copied()
            .ok_or(FormatError::FrameShort(frame))?;
        *cursor += 1;
        let value = number(Some(token), "motion value")?;
        match channel {
            Channel::Xposition => position.x = value,
            Channel::Yposition => position.y = value,
            Channel::Zposition => position.z = value,
            Channel::Xrotation => {
                rotation *= glm::quat_angle_axis(
                    value.to_radians(),
                    &glm::vec3(1.0, 0.0, 0.0),
                );
            }
            Channel::Yrotation => {
                rotation *= glm::quat_angle_axis(
                    value.to_radians(),
                    &glm::vec3(0.0, 1.0, 0.0),
                );
            }
            Channel::Zrotation => {
                rotation *= glm::quat_angle_axis(
                    value.to_radians(),
                    &glm::vec3(0.0, 0.0, 1.0),
                );
            }
        }
    }

    joint.frames.push(Keyframe {
        time,
        position,
        rotation,
    });

    for child in &mut joint.children {
        read_frame_data(tokens, cursor, time, child, frame)?;
    }
    Ok(())
}

// Walks the joint tree depth first, appending bones in the order the
// joints appear in the file
fn collect_bones(joint: &Joint, parent: Option<usize>, bones: &mut Vec<Bone>) {
    let index = bones.len();
    bones.push(Bone {
        name: sanitize_name(&joint.name),
        offset: joint.offset,
        parent,
        children: Vec::new(),
    });
    if let Some(parent_index) = parent {
        bones[parent_index].children.push(index);
    }
    for child in &joint.children {
        collect_bones(child, Some(index), bones);
    }
}

/// Builds the bone list from the joint tree. End sites become bones too so
/// the skeleton keeps the full shape of the hierarchy.
fn build_skeleton(root: &Joint) -> Skeleton {
    let mut bones = Vec::new();
    collect_bones(root, None, &mut bones);
    Skeleton::new(bones)
}

fn collect_tracks(
    joint: &Joint,
    skeleton: &Skeleton,
    import_options: &ImportOptions,
    tracks: &mut Vec<Track>,
    warnings: &mut Vec<BindingWarning>,
) {
    if joint.kind != JointKind::EndSite && !joint.frames.is_empty() {
        let bone_name = sanitize_name(&joint.name);
        if skeleton.bone_index(&bone_name).is_some() {
            let mut times = Vec::with_capacity(joint.frames.len());
            let mut positions = Vec::with_capacity(joint.frames.len() * 3);
            let mut rotations = Vec::with_capacity(joint.frames.len() * 4);
            for frame in &joint.frames {
                times.push(frame.time);
                positions.push(frame.position.x);
                positions.push(frame.position.y);
                positions.push(frame.position.z);
                rotations.push(frame.rotation.i);
                rotations.push(frame.rotation.j);
                rotations.push(frame.rotation.k);
                rotations.push(frame.rotation.w);
            }
            if import_options.animate_bone_positions {
                tracks.push(Track {
                    bone: bone_name.clone(),
                    property: TrackProperty::Position,
                    times: times.clone(),
                    values: positions,
                });
            }
            if import_options.animate_bone_rotations {
                tracks.push(Track {
                    bone: bone_name,
                    property: TrackProperty::Rotation,
                    times,
                    values: rotations,
                });
            }
        } else {
            warn!("no bone for joint {}", joint.name);
            warnings.push(BindingWarning::UnresolvedBone {
                joint: joint.name.clone(),
            });
        }
    }
    for child in &joint.children {
        collect_tracks(child, skeleton, import_options, tracks, warnings);
    }
}

/// Builds the clip from the joint tree. The bone for each track is found
/// by sanitized name. A joint whose name resolves to no bone is reported
/// and skipped without ending the whole import.
fn build_clip(
    root: &Joint,
    skeleton: &Skeleton,
    import_options: &ImportOptions,
    warnings: &mut Vec<BindingWarning>,
) -> Clip {
    let mut tracks = Vec::new();
    collect_tracks(root, skeleton, import_options, &mut tracks, warnings);
    let duration = tracks.iter().map(Track::end_time).fold(0.0_f32, f32::max);
    Clip {
        name: CLIP_NAME.to_string(),
        duration,
        tracks,
    }
}

/// Parses the text of a BVH file into a skeleton and an animation clip
///
/// The hierarchy is read first, then each line of the motion block is
/// applied to it in the same depth first order the joints were declared
/// in. A structural problem ends the parse with a `FormatError`. Problems
/// that leave the result usable are collected as `BindingWarning` values
/// in the returned data and logged.
///
/// # Errors
/// May return `FormatError` if the data cannot be parsed
#[allow(clippy::cast_precision_loss)]
pub fn parse(
    text: &str,
    import_options: &ImportOptions,
) -> Result<MocapLoaded, FormatError> {
    let mut lines = Lines::new(text);
    let mut warnings = Vec::new();

    expect_keyword(lines.next_significant()?, "HIERARCHY")?;
    let first = lines.next_significant()?;
    let mut root = read_node(&mut lines, first, &mut warnings)?;

    expect_keyword(lines.next_significant()?, "MOTION")?;

    // "Frames:" line with the count in the second token
    let frame_count = {
        let line = lines.next_significant()?;
        integer(line.split_whitespace().nth(1), "frame count")?
    };

    // "Frame Time:" line with the seconds per frame in the third token
    let frame_time = {
        let line = lines.next_significant()?;
        number(line.split_whitespace().nth(2), "frame time")?
    };

    for frame in 0..frame_count {
        let tokens: Vec<&str> =
            lines.next_significant()?.split_whitespace().collect();
        let mut cursor = 0;
        let time = frame_time * frame as f32;
        read_frame_data(&tokens, &mut cursor, time, &mut root, frame)?;
    }

    let skeleton = build_skeleton(&root);
    let clip = build_clip(&root, &skeleton, import_options, &mut warnings);

    info!(
        "Bones={}, Frames={}, Frame time={}, Tracks={}",
        skeleton.bones.len(),
        frame_count,
        frame_time,
        clip.tracks.len()
    );
    debug!("skeleton={skeleton:?}");
    trace!("clip={clip:?}"); // Holds every sample so keep it at trace

    Ok(MocapLoaded {
        skeleton,
        clip,
        frame_count,
        frame_time,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::{Channel, Joint, JointKind};
    use crate::animation::{Bone, Keyframe, Skeleton, TrackProperty};
    use crate::mocap_import::{BindingWarning, FormatError, ImportOptions};
    use nalgebra_glm as glm;
    use smallvec::SmallVec;

    const EPSILON: f32 = 0.0005_f32;

    const SOLO: &str = "HIERARCHY
ROOT Solo
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
    End Site
    {
        OFFSET 0.0 1.0 0.0
    }
}
MOTION
Frames: 2
Frame Time: 0.1
90.0 0.0 0.0
90.0 90.0 0.0
";

    const TWINS: &str = "HIERARCHY
ROOT Base
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Xposition Yposition Zposition
    JOINT Twin
    {
        OFFSET 0.0 1.0 0.0
        CHANNELS 3 Xrotation Yrotation Zrotation
        End Site
        {
            OFFSET 0.0 1.0 0.0
        }
    }
    JOINT Twin
    {
        OFFSET 1.0 0.0 0.0
        CHANNELS 3 Xrotation Yrotation Zrotation
        End Site
        {
            OFFSET 1.0 0.0 0.0
        }
    }
}
MOTION
Frames: 1
Frame Time: 0.5
1.0 2.0 3.0 0.0 0.0 0.0 10.0 20.0 30.0
";

    fn approx_eq(a: f32, b: f32) {
        assert!((b - a).abs() < EPSILON);
    }

    fn quat_eq(a: &glm::Quat, b: &glm::Quat) {
        let c = glm::quat_equal_eps(a, b, EPSILON);
        assert!(c.x && c.y && c.z && c.w);
    }

    #[test]
    fn lines() {
        let mut lines = super::Lines::new("first\r\n\r\n   second   \nthird");
        assert_eq!(lines.next_significant().unwrap(), "first");
        assert_eq!(lines.next_significant().unwrap(), "second");
        assert_eq!(lines.next_significant().unwrap(), "third");
        assert!(matches!(
            lines.next_significant(),
            Err(FormatError::UnexpectedEnd)
        ));
    }

    #[test]
    fn numbers() {
        approx_eq(super::number(Some("1.25"), "value").unwrap(), 1.25_f32);
        assert!(matches!(
            super::number(Some("fast"), "value"),
            Err(FormatError::NotNumeric { .. })
        ));
        assert!(matches!(
            super::number(Some("NaN"), "value"),
            Err(FormatError::NotNumeric { .. })
        ));
        assert!(matches!(
            super::number(None, "value"),
            Err(FormatError::UnexpectedEnd)
        ));
        assert_eq!(super::integer(Some("12"), "count").unwrap(), 12);
        assert!(matches!(
            super::integer(Some("-3"), "count"),
            Err(FormatError::NotNumeric { .. })
        ));
    }

    #[test]
    fn sanitize_name() {
        let once = super::sanitize_name("mixamorig:Hips");
        assert_eq!(once, "mixamorig_Hips");
        // Already sanitized names pass through unchanged
        assert_eq!(super::sanitize_name(&once), "mixamorig_Hips");
        assert_eq!(super::sanitize_name("a:b:c"), "a_b_c");
    }

    #[test]
    fn read_node() {
        let text = "{
OFFSET 1.0 2.0 3.0
CHANNELS 3 Zrotation Xrotation Yrotation
End Site
{
OFFSET 0.0 1.0 0.0
}
}";
        let mut lines = super::Lines::new(text);
        let mut warnings = Vec::new();
        let joint =
            super::read_node(&mut lines, "JOINT Spine", &mut warnings)
                .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(joint.name, "Spine");
        assert_eq!(joint.kind, JointKind::Joint);
        approx_eq(joint.offset.x, 1.0_f32);
        approx_eq(joint.offset.y, 2.0_f32);
        approx_eq(joint.offset.z, 3.0_f32);
        assert_eq!(
            joint.channels.as_slice(),
            [Channel::Zrotation, Channel::Xrotation, Channel::Yrotation]
                .as_slice()
        );

        assert_eq!(joint.children.len(), 1);
        let end = &joint.children[0];
        assert_eq!(end.name, "ENDSITE");
        assert_eq!(end.kind, JointKind::EndSite);
        approx_eq(end.offset.y, 1.0_f32);
        assert!(end.channels.is_empty());
        assert!(end.children.is_empty());
    }

    #[test]
    fn read_node_rejects() {
        let mut warnings = Vec::new();

        let mut lines = super::Lines::new("{\nOFFSET 0 0 0\n}");
        let res = super::read_node(&mut lines, "BONE Foo", &mut warnings);
        assert!(matches!(res, Err(FormatError::NodeType(_))));

        let mut lines = super::Lines::new("{\nOFFSET 0 0 0\n}");
        let res = super::read_node(&mut lines, "JOINT", &mut warnings);
        assert!(matches!(res, Err(FormatError::MissingName(_))));

        // Brace must open the block
        let mut lines = super::Lines::new("OFFSET 0 0 0\n}");
        let res = super::read_node(&mut lines, "ROOT Hips", &mut warnings);
        assert!(matches!(
            res,
            Err(FormatError::Keyword { expected: "{", .. })
        ));

        // Offset must carry three values
        let mut lines = super::Lines::new("{\nOFFSET 1.0 2.0\n}");
        let res = super::read_node(&mut lines, "ROOT Hips", &mut warnings);
        assert!(matches!(res, Err(FormatError::OffsetValues(2))));

        // Channel count must not exceed the tags present
        let mut lines = super::Lines::new(
            "{\nOFFSET 0 0 0\nCHANNELS 3 Xrotation Yrotation\n}",
        );
        let res = super::read_node(&mut lines, "ROOT Hips", &mut warnings);
        assert!(matches!(
            res,
            Err(FormatError::ChannelValues {
                declared: 3,
                present: 2
            })
        ));

        // End sites hold nothing but an offset
        let mut lines = super::Lines::new(
            "{\nOFFSET 0 0 0\nJOINT Extra\n{\nOFFSET 0 0 0\n}\n}",
        );
        let res = super::read_node(&mut lines, "End Site", &mut warnings);
        assert!(matches!(
            res,
            Err(FormatError::Keyword { expected: "}", .. })
        ));
    }

    #[test]
    fn channel_order() {
        let loaded = super::parse(SOLO, &ImportOptions::default()).unwrap();
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.frame_count, 2);

        let track = loaded
            .clip
            .tracks
            .iter()
            .find(|t| t.property == TrackProperty::Rotation)
            .unwrap();
        assert_eq!(track.values.len(), 8);

        // Frame 0 is a quarter turn about Z alone
        let q0 = glm::quat(
            track.values[0],
            track.values[1],
            track.values[2],
            track.values[3],
        );
        quat_eq(
            &q0,
            &glm::quat_angle_axis(
                std::f32::consts::FRAC_PI_2,
                &glm::vec3(0.0_f32, 0.0_f32, 1.0_f32),
            ),
        );
        approx_eq(track.values[0], 0.0_f32);
        approx_eq(track.values[1], 0.0_f32);
        approx_eq(track.values[2], std::f32::consts::FRAC_1_SQRT_2);
        approx_eq(track.values[3], std::f32::consts::FRAC_1_SQRT_2);

        // Frame 1 composes the Z turn first and the X turn second
        let q1 = glm::quat(
            track.values[4],
            track.values[5],
            track.values[6],
            track.values[7],
        );
        quat_eq(&q1, &glm::quat(0.5_f32, 0.5_f32, 0.5_f32, 0.5_f32));
    }

    #[test]
    fn duplicate_names_last_wins() {
        let loaded = super::parse(TWINS, &ImportOptions::default()).unwrap();
        let skeleton = &loaded.skeleton;

        // Depth first order with both end sites present
        assert_eq!(skeleton.bones.len(), 5);
        assert_eq!(skeleton.bones[0].name, "Base");
        assert_eq!(skeleton.bones[1].name, "Twin");
        assert_eq!(skeleton.bones[2].name, "ENDSITE");
        assert_eq!(skeleton.bones[3].name, "Twin");
        assert_eq!(skeleton.bones[4].name, "ENDSITE");

        assert_eq!(skeleton.bones[0].children, vec![1, 3]);
        assert_eq!(skeleton.bones[1].children, vec![2]);
        assert_eq!(skeleton.bones[3].children, vec![4]);
        assert_eq!(skeleton.bones[1].parent, Some(0));
        assert_eq!(skeleton.bones[3].parent, Some(0));

        // Repeated names resolve to the bone declared last
        assert_eq!(skeleton.bone_index("Twin"), Some(3));
        assert_eq!(skeleton.bone_index("ENDSITE"), Some(4));

        // Both joints named Twin still emit their own tracks
        assert_eq!(loaded.clip.tracks.len(), 6);
    }

    #[test]
    fn frame_short() {
        let text = "HIERARCHY
ROOT Solo
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
    End Site
    {
        OFFSET 0.0 1.0 0.0
    }
}
MOTION
Frames: 2
Frame Time: 0.1
90.0 0.0 0.0
90.0 90.0
";
        let res = super::parse(text, &ImportOptions::default());
        assert!(matches!(res, Err(FormatError::FrameShort(1))));
    }

    #[test]
    fn missing_frames() {
        let text = "HIERARCHY
ROOT Solo
{
    OFFSET 0.0 0.0 0.0
    CHANNELS 3 Zrotation Xrotation Yrotation
    End Site
    {
        OFFSET 0.0 1.0 0.0
    }
}
MOTION
Frames: 3
Frame Time: 0.1
90.0 0.0 0.0
";
        let res = super::parse(text, &ImportOptions::default());
        assert!(matches!(res, Err(FormatError::UnexpectedEnd)));
    }

    #[test]
    fn orphan_joint_warns() {
        let joint = Joint {
            name: "Orphan".to_string(),
            kind: JointKind::Joint,
            offset: glm::vec3(0.0_f32, 0.0_f32, 0.0_f32),
            channels: SmallVec::new(),
            children: Vec::new(),
            frames: vec![Keyframe {
                time: 0.0_f32,
                position: glm::vec3(0.0_f32, 0.0_f32, 0.0_f32),
                rotation: glm::Quat::identity(),
            }],
        };
        let skeleton = Skeleton::new(vec![Bone {
            name: "Other".to_string(),
            offset: glm::vec3(0.0_f32, 0.0_f32, 0.0_f32),
            parent: None,
            children: Vec::new(),
        }]);

        let mut warnings = Vec::new();
        let clip = super::build_clip(
            &joint,
            &skeleton,
            &ImportOptions::default(),
            &mut warnings,
        );
        assert!(clip.tracks.is_empty());
        assert_eq!(
            warnings,
            vec![BindingWarning::UnresolvedBone {
                joint: "Orphan".to_string()
            }]
        );

        // The lookup happens even when both track kinds are disabled
        let quiet = ImportOptions {
            animate_bone_positions: false,
            animate_bone_rotations: false,
        };
        let mut warnings = Vec::new();
        let clip = super::build_clip(&joint, &skeleton, &quiet, &mut warnings);
        assert!(clip.tracks.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
