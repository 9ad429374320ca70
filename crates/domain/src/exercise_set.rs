use std::{fmt, slice::Iter};

use derive_more::Deref;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::{ExerciseID, Property, parse_raw};

pub const POUNDS_PER_KILOGRAM: f32 = 2.20462;

/// One performed set of an exercise.
///
/// Grip and stance are kept in their persisted string form so that records
/// written by other versions stay readable. Use the typed accessors to read
/// and write them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub id: ExerciseSetID,
    pub exercise_id: Option<ExerciseID>,
    pub set_number: u32,
    pub reps: u32,
    pub weight: f32,
    pub unit: WeightUnit,
    pub duration: Option<u32>,
    pub set_type: SetType,
    pub rpe: Option<f32>,
    pub rir: Option<u32>,
    pub rest_time: Option<u32>,
    pub tempo: Option<String>,
    pub grip_type_raw: Option<String>,
    pub stance_type_raw: Option<String>,
}

impl ExerciseSet {
    #[must_use]
    pub fn new(set_number: u32, reps: u32, weight: f32, unit: WeightUnit) -> Self {
        Self {
            id: Uuid::new_v4().into(),
            exercise_id: None,
            set_number,
            reps,
            weight,
            unit,
            duration: None,
            set_type: SetType::Normal,
            rpe: None,
            rir: None,
            rest_time: None,
            tempo: None,
            grip_type_raw: None,
            stance_type_raw: None,
        }
    }

    #[must_use]
    pub fn timed(set_number: u32, duration: u32) -> Self {
        Self {
            duration: Some(duration),
            ..Self::new(set_number, 0, 0.0, WeightUnit::default())
        }
    }

    #[must_use]
    pub fn weight_in_pounds(&self) -> f32 {
        self.weight_in(WeightUnit::Lbs)
    }

    #[must_use]
    pub fn weight_in_kilograms(&self) -> f32 {
        self.weight_in(WeightUnit::Kg)
    }

    #[must_use]
    pub fn weight_in(&self, unit: WeightUnit) -> f32 {
        self.unit.convert(self.weight, unit)
    }

    /// Weight times reps, in the stored unit.
    #[must_use]
    pub fn volume(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = self.reps as f32;
        self.weight * reps
    }

    #[must_use]
    pub fn volume_in(&self, unit: WeightUnit) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = self.reps as f32;
        self.weight_in(unit) * reps
    }

    #[must_use]
    pub fn grip_type(&self) -> Option<GripType> {
        parse_raw(self.grip_type_raw.as_deref())
    }

    pub fn set_grip_type(&mut self, grip_type: Option<GripType>) {
        self.grip_type_raw = grip_type.map(|g| g.as_ref().to_string());
    }

    #[must_use]
    pub fn stance_type(&self) -> Option<StanceType> {
        parse_raw(self.stance_type_raw.as_deref())
    }

    pub fn set_stance_type(&mut self, stance_type: Option<StanceType>) {
        self.stance_type_raw = stance_type.map(|s| s.as_ref().to_string());
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseSetID(Uuid);

impl ExerciseSetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseSetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseSetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl WeightUnit {
    #[must_use]
    pub fn convert(self, value: f32, to: WeightUnit) -> f32 {
        match (self, to) {
            (WeightUnit::Lbs, WeightUnit::Lbs) | (WeightUnit::Kg, WeightUnit::Kg) => value,
            (WeightUnit::Kg, WeightUnit::Lbs) => value * POUNDS_PER_KILOGRAM,
            (WeightUnit::Lbs, WeightUnit::Kg) => value / POUNDS_PER_KILOGRAM,
        }
    }
}

impl Property for WeightUnit {
    fn iter() -> Iter<'static, WeightUnit> {
        static UNITS: [WeightUnit; 2] = [WeightUnit::Lbs, WeightUnit::Kg];
        UNITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Lbs => "Pounds",
            WeightUnit::Kg => "Kilograms",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum SetType {
    #[default]
    Normal,
    Warmup,
    DropSet,
    Superset,
    RestPause,
    Amrap,
    ToFailure,
    Cluster,
}

impl Property for SetType {
    fn iter() -> Iter<'static, SetType> {
        static SET_TYPES: [SetType; 8] = [
            SetType::Normal,
            SetType::Warmup,
            SetType::DropSet,
            SetType::Superset,
            SetType::RestPause,
            SetType::Amrap,
            SetType::ToFailure,
            SetType::Cluster,
        ];
        SET_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SetType::Normal => "Normal",
            SetType::Warmup => "Warm-up",
            SetType::DropSet => "Drop Set",
            SetType::Superset => "Superset",
            SetType::RestPause => "Rest-Pause",
            SetType::Amrap => "AMRAP",
            SetType::ToFailure => "To Failure",
            SetType::Cluster => "Cluster",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum GripType {
    Overhand,
    Underhand,
    Neutral,
    Mixed,
    Hook,
    Wide,
    Close,
}

impl Property for GripType {
    fn iter() -> Iter<'static, GripType> {
        static GRIP_TYPES: [GripType; 7] = [
            GripType::Overhand,
            GripType::Underhand,
            GripType::Neutral,
            GripType::Mixed,
            GripType::Hook,
            GripType::Wide,
            GripType::Close,
        ];
        GRIP_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            GripType::Overhand => "Overhand",
            GripType::Underhand => "Underhand",
            GripType::Neutral => "Neutral",
            GripType::Mixed => "Mixed",
            GripType::Hook => "Hook",
            GripType::Wide => "Wide",
            GripType::Close => "Close",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum StanceType {
    Narrow,
    ShoulderWidth,
    Wide,
    Sumo,
    Staggered,
    Split,
}

impl Property for StanceType {
    fn iter() -> Iter<'static, StanceType> {
        static STANCE_TYPES: [StanceType; 6] = [
            StanceType::Narrow,
            StanceType::ShoulderWidth,
            StanceType::Wide,
            StanceType::Sumo,
            StanceType::Staggered,
            StanceType::Split,
        ];
        STANCE_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            StanceType::Narrow => "Narrow",
            StanceType::ShoulderWidth => "Shoulder Width",
            StanceType::Wide => "Wide",
            StanceType::Sumo => "Sumo",
            StanceType::Staggered => "Staggered",
            StanceType::Split => "Split",
        }
    }
}
