use crate::animation::{Clip, Skeleton};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ImportOptions {
    pub animate_bone_positions: bool,
    pub animate_bone_rotations: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            animate_bone_positions: true,
            animate_bone_rotations: true,
        }
    }
}

/// Skeleton and animation loaded from a motion capture file. `warnings`
/// holds the non-fatal problems found along the way.
#[derive(Clone, Debug)]
pub struct MocapLoaded {
    pub skeleton: Skeleton,
    pub clip: Clip,
    pub frame_count: usize,
    pub frame_time: f32,
    pub warnings: Vec<BindingWarning>,
}

/// Errors from parsing a motion capture file. Parsing stops at the first
/// structural problem and the error describes what was expected and what
/// was found.
#[derive(Debug)]
pub enum FormatError {
    UnexpectedEnd,
    Keyword {
        expected: &'static str,
        found: String,
    },
    NodeType(String),
    MissingName(String),
    OffsetValues(usize),
    ChannelValues {
        declared: usize,
        present: usize,
    },
    NotNumeric {
        expected: &'static str,
        found: String,
    },
    FrameShort(usize),
}

impl std::error::Error for FormatError {}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => write!(f, "unexpected end of data"),
            Self::Keyword { expected, found } => {
                write!(f, "expected \"{expected}\" but found \"{found}\"")
            }
            Self::NodeType(a) => {
                write!(f, "expected ROOT, JOINT or End Site but found \"{a}\"")
            }
            Self::MissingName(a) => write!(f, "{a} node is missing a name"),
            Self::OffsetValues(a) => {
                write!(f, "OFFSET must have 3 values but found {a}")
            }
            Self::ChannelValues { declared, present } => {
                write!(
                    f,
                    "CHANNELS declares {declared} tags but {present} are present"
                )
            }
            Self::NotNumeric { expected, found } => {
                write!(f, "expected {expected} but found \"{found}\"")
            }
            Self::FrameShort(a) => {
                write!(f, "frame {a} has too few values")
            }
        }
    }
}

/// Non-fatal problems found while binding motion data to the skeleton.
/// These are logged and returned alongside the result, never in place
/// of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BindingWarning {
    UnknownChannel { joint: String, tag: String },
    UnresolvedBone { joint: String },
}

impl std::fmt::Display for BindingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownChannel { joint, tag } => {
                write!(f, "joint \"{joint}\" has unknown channel tag \"{tag}\"")
            }
            Self::UnresolvedBone { joint } => {
                write!(f, "joint \"{joint}\" has no matching bone")
            }
        }
    }
}
