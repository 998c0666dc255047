use serde::{Deserialize, Serialize};

use crate::exercises::filter::{self, FilterCriteria};

/// Muscle classification tags attached to each exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
}

impl MuscleGroup {
    /// Case-insensitive parse, used for query-string tokens.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "chest" => Some(Self::Chest),
            "back" => Some(Self::Back),
            "shoulders" => Some(Self::Shoulders),
            "biceps" => Some(Self::Biceps),
            "triceps" => Some(Self::Triceps),
            "forearms" => Some(Self::Forearms),
            "quads" => Some(Self::Quads),
            "hamstrings" => Some(Self::Hamstrings),
            "glutes" => Some(Self::Glutes),
            "calves" => Some(Self::Calves),
            "core" => Some(Self::Core),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Barbell,
    Dumbbell,
    Kettlebell,
    Cable,
    Machine,
    Bodyweight,
    Band,
}

impl EquipmentCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "barbell" => Some(Self::Barbell),
            "dumbbell" => Some(Self::Dumbbell),
            "kettlebell" => Some(Self::Kettlebell),
            "cable" => Some(Self::Cable),
            "machine" => Some(Self::Machine),
            "bodyweight" => Some(Self::Bodyweight),
            "band" => Some(Self::Band),
            _ => None,
        }
    }
}

/// A piece of equipment an exercise is performed with. The optional name
/// qualifies the category ("EZ bar", "incline bench").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub category: EquipmentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One entry of the exercise dictionary. Difficulty runs 1 (easiest) to 5 and
/// is optional — not every movement has a meaningful rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

const BUILTIN_CATALOG: &str = include_str!("../../data/exercises.json");

/// The static exercise dictionary, loaded once at startup and shared
/// read-only. Order is the dictionary's display order and is preserved by
/// filtering.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// Load the catalog embedded in the binary.
    pub fn load_builtin() -> Result<Self, serde_json::Error> {
        let exercises = serde_json::from_str(BUILTIN_CATALOG)?;
        Ok(Self { exercises })
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Apply `criteria`, returning matching exercises in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Exercise> {
        filter::apply(&self.exercises, criteria)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
