use std::collections::HashSet;

use crate::exercises::catalog::{EquipmentCategory, Exercise, MuscleGroup};

/// Active filter predicates over the exercise dictionary. An empty field means
/// "no constraint" for that clause; the clauses are conjunctive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub muscle_groups: HashSet<MuscleGroup>,
    pub equipment_types: HashSet<EquipmentCategory>,
    pub difficulty: HashSet<u8>,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn set_muscle_groups(&mut self, muscle_groups: HashSet<MuscleGroup>) {
        self.muscle_groups = muscle_groups;
    }

    pub fn set_equipment_types(&mut self, equipment_types: HashSet<EquipmentCategory>) {
        self.equipment_types = equipment_types;
    }

    pub fn set_difficulty(&mut self, difficulty: HashSet<u8>) {
        self.difficulty = difficulty;
    }

    pub fn set_search_text(&mut self, search_text: String) {
        self.search_text = search_text;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// True when every active clause accepts the exercise.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.matches_muscles(exercise)
            && self.matches_equipment(exercise)
            && self.matches_difficulty(exercise)
            && self.matches_search(exercise)
    }

    fn matches_muscles(&self, exercise: &Exercise) -> bool {
        if self.muscle_groups.is_empty() {
            return true;
        }
        exercise
            .primary_muscles
            .iter()
            .chain(&exercise.secondary_muscles)
            .any(|m| self.muscle_groups.contains(m))
    }

    fn matches_equipment(&self, exercise: &Exercise) -> bool {
        if self.equipment_types.is_empty() {
            return true;
        }
        exercise
            .equipment
            .iter()
            .any(|eq| self.equipment_types.contains(&eq.category))
    }

    // An exercise without a difficulty rating is never excluded by this clause.
    fn matches_difficulty(&self, exercise: &Exercise) -> bool {
        if self.difficulty.is_empty() {
            return true;
        }
        match exercise.difficulty {
            Some(d) => self.difficulty.contains(&d),
            None => true,
        }
    }

    fn matches_search(&self, exercise: &Exercise) -> bool {
        let needle = self.search_text.trim();
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        hit(&exercise.name)
            || exercise.extra.as_deref().is_some_and(hit)
            || exercise.description.as_deref().is_some_and(hit)
    }
}

/// Filter `exercises` by `criteria`, preserving input order. The input is
/// never mutated; the result is recomputed in full on every call.
pub fn apply<'a>(exercises: &'a [Exercise], criteria: &FilterCriteria) -> Vec<&'a Exercise> {
    exercises.iter().filter(|e| criteria.matches(e)).collect()
}
