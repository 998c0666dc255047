//! ExerciseFilter tests — clause-by-clause behavior, conjunction, ordering,
//! and the built-in catalog.

use std::collections::HashSet;

use liftlog::exercises::catalog::{
    Equipment, EquipmentCategory, Exercise, ExerciseCatalog, MuscleGroup,
};
use liftlog::exercises::filter::{self, FilterCriteria};

fn exercise(
    id: &str,
    name: &str,
    primary: &[MuscleGroup],
    secondary: &[MuscleGroup],
    equipment: &[EquipmentCategory],
    difficulty: Option<u8>,
) -> Exercise {
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        extra: None,
        description: None,
        primary_muscles: primary.to_vec(),
        secondary_muscles: secondary.to_vec(),
        equipment: equipment
            .iter()
            .map(|&category| Equipment { category, name: None })
            .collect(),
        difficulty,
    }
}

/// Bench Press (Chest/Barbell/3), Row (Back/Cable/1), Stretch (Core, no
/// difficulty) — the fixture used by most tests.
fn fixture() -> Vec<Exercise> {
    vec![
        exercise(
            "a",
            "Bench Press",
            &[MuscleGroup::Chest],
            &[MuscleGroup::Triceps],
            &[EquipmentCategory::Barbell],
            Some(3),
        ),
        exercise(
            "b",
            "Row",
            &[MuscleGroup::Back],
            &[],
            &[EquipmentCategory::Cable],
            Some(1),
        ),
        exercise(
            "c",
            "Stretch",
            &[MuscleGroup::Core],
            &[],
            &[EquipmentCategory::Bodyweight],
            None,
        ),
    ]
}

fn ids(result: &[&Exercise]) -> Vec<String> {
    result.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn empty_criteria_returns_everything_in_order() {
    let exercises = fixture();
    let criteria = FilterCriteria::default();

    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["a", "b", "c"]);
}

#[test]
fn muscle_group_filter() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Chest]));

    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["a"]);
}

#[test]
fn secondary_muscles_also_match() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Triceps]));

    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["a"]);
}

#[test]
fn equipment_filter() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_equipment_types(HashSet::from([EquipmentCategory::Cable]));

    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["b"]);
}

#[test]
fn difficulty_filter_never_excludes_unrated_exercises() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_difficulty(HashSet::from([3]));

    // "c" has no difficulty and passes the clause vacuously.
    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["a", "c"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_search_text("ben".to_string());

    let result = filter::apply(&exercises, &criteria);
    assert_eq!(ids(&result), vec!["a"]);
}

#[test]
fn search_matches_extra_and_description() {
    let mut with_extra = exercise("d", "Press", &[], &[], &[], None);
    with_extra.extra = Some("Incline".to_string());
    let mut with_desc = exercise("e", "Curl", &[], &[], &[], None);
    with_desc.description = Some("Supinated grip".to_string());
    let exercises = vec![with_extra, with_desc];

    let mut criteria = FilterCriteria::default();
    criteria.set_search_text("incline".to_string());
    assert_eq!(ids(&filter::apply(&exercises, &criteria)), vec!["d"]);

    criteria.set_search_text("SUPINATED".to_string());
    assert_eq!(ids(&filter::apply(&exercises, &criteria)), vec!["e"]);
}

#[test]
fn whitespace_only_search_matches_everything() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_search_text("   ".to_string());

    assert_eq!(filter::apply(&exercises, &criteria).len(), exercises.len());
}

#[test]
fn clauses_are_conjunctive() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Chest]));
    criteria.set_equipment_types(HashSet::from([EquipmentCategory::Cable]));

    assert!(filter::apply(&exercises, &criteria).is_empty());
}

#[test]
fn applying_twice_yields_identical_results() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Chest, MuscleGroup::Back]));
    criteria.set_search_text("r".to_string());

    let first = ids(&filter::apply(&exercises, &criteria));
    let second = ids(&filter::apply(&exercises, &criteria));
    assert_eq!(first, second);
}

#[test]
fn clear_all_resets_every_field() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Back]));
    criteria.set_difficulty(HashSet::from([1]));
    criteria.set_search_text("row".to_string());

    criteria.clear_all();
    assert_eq!(criteria, FilterCriteria::default());
    assert_eq!(filter::apply(&exercises, &criteria).len(), exercises.len());
}

#[test]
fn mutators_replace_one_field_only() {
    let mut criteria = FilterCriteria::default();
    criteria.set_search_text("press".to_string());
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Chest]));

    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Back]));
    assert_eq!(criteria.muscle_groups, HashSet::from([MuscleGroup::Back]));
    assert_eq!(criteria.search_text, "press");
    assert!(criteria.equipment_types.is_empty());
}

#[test]
fn input_is_not_mutated() {
    let exercises = fixture();
    let mut criteria = FilterCriteria::default();
    criteria.set_muscle_groups(HashSet::from([MuscleGroup::Back]));

    let _ = filter::apply(&exercises, &criteria);
    assert_eq!(exercises.len(), 3);
    assert_eq!(exercises[0].id, "a");
}

#[test]
fn builtin_catalog_loads_with_unique_ids() {
    let catalog = ExerciseCatalog::load_builtin().expect("catalog should parse");
    assert!(!catalog.is_empty());

    let mut seen = HashSet::new();
    for ex in catalog.all() {
        assert!(seen.insert(ex.id.clone()), "duplicate id: {}", ex.id);
        assert!(!ex.name.is_empty());
    }

    assert!(catalog.get("bench-press").is_some());
    assert!(catalog.get("no-such-exercise").is_none());
}

#[test]
fn catalog_filter_preserves_catalog_order() {
    let catalog = ExerciseCatalog::load_builtin().expect("catalog should parse");
    let mut criteria = FilterCriteria::default();
    criteria.set_equipment_types(HashSet::from([EquipmentCategory::Barbell]));

    let result = catalog.filter(&criteria);
    assert!(!result.is_empty());

    // Results appear in the same relative order as the full catalog.
    let full_order: Vec<&str> = catalog.all().iter().map(|e| e.id.as_str()).collect();
    let mut last_pos = 0;
    for ex in &result {
        let pos = full_order.iter().position(|id| *id == ex.id).expect("in catalog");
        assert!(pos >= last_pos);
        last_pos = pos;
    }
}

#[test]
fn enum_parsing_is_case_insensitive() {
    assert_eq!(MuscleGroup::from_name("chest"), Some(MuscleGroup::Chest));
    assert_eq!(MuscleGroup::from_name(" HAMSTRINGS "), Some(MuscleGroup::Hamstrings));
    assert_eq!(MuscleGroup::from_name("wings"), None);

    assert_eq!(EquipmentCategory::from_name("Barbell"), Some(EquipmentCategory::Barbell));
    assert_eq!(EquipmentCategory::from_name("treadmill"), None);
}
