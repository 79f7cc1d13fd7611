use ahash::{HashMap, HashMapExt};
use nalgebra_glm as glm;

/// One pose sample for one joint. The rotation is the composed product of
/// the per axis rotations in the channel order declared by the file.
#[derive(Clone, Copy, Debug)]
pub struct Keyframe {
    pub time: f32,
    pub position: glm::Vec3,
    pub rotation: glm::Quat,
}

/// One bone of a skeleton. `offset` is the rest pose translation relative to
/// the parent. `parent` and `children` are indices into the bone list of the
/// owning `Skeleton`.
#[derive(Clone, Debug)]
pub struct Bone {
    pub name: String,
    pub offset: glm::Vec3,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Ordered bone list with a name lookup. Bones are stored parent first with
/// children in file order, so a parent index is always smaller than the
/// indices of its children.
#[derive(Clone, Debug)]
pub struct Skeleton {
    pub bones: Vec<Bone>,
    by_name: HashMap<String, usize>,
}

impl Skeleton {
    /// Creates a skeleton from a bone list and builds the name lookup. When
    /// names repeat, the last bone with that name wins.
    #[must_use]
    pub fn new(bones: Vec<Bone>) -> Self {
        let mut by_name = HashMap::with_capacity(bones.len());
        for (index, bone) in bones.iter().enumerate() {
            by_name.insert(bone.name.clone(), index);
        }
        Self { bones, by_name }
    }

    /// Looks up a bone index by name
    #[must_use]
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

/// Which bone property a track animates
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TrackProperty {
    Position,
    Rotation,
}

impl TrackProperty {
    /// Number of floats per sample in a track's value array
    #[must_use]
    pub const fn components(self) -> usize {
        match self {
            Self::Position => 3,
            Self::Rotation => 4,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Rotation => "rotation",
        }
    }
}

/// Sample times with flattened values animating one property of one bone.
/// Position values are 3 floats per sample. Rotation values are 4 floats
/// per sample in x, y, z, w order.
#[derive(Clone, Debug)]
pub struct Track {
    pub bone: String,
    pub property: TrackProperty,
    pub times: Vec<f32>,
    pub values: Vec<f32>,
}

impl Track {
    /// Binding path for the track in the form `Hips.position` or
    /// `Hips.rotation`
    #[must_use]
    pub fn target_path(&self) -> String {
        format!("{}.{}", self.bone, self.property.as_str())
    }

    /// Timestamp of the final sample, or 0.0 for an empty track
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0_f32)
    }
}

/// A named animation made of per bone tracks. `duration` is the end time of
/// the longest track.
#[derive(Clone, Debug)]
pub struct Clip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

/// Position and rotation of one bone, either local to its parent or composed
/// to world space
#[derive(Clone, Copy, Debug)]
pub struct BonePose {
    pub position: glm::Vec3,
    pub rotation: glm::Quat,
}
