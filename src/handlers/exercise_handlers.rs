use std::collections::HashSet;
use std::hash::Hash;

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::exercises::catalog::{EquipmentCategory, ExerciseCatalog, MuscleGroup};
use crate::exercises::filter::FilterCriteria;

/// Query-string form of the filter criteria; list fields are comma-separated.
/// `GET /exercises?muscles=Chest,Back&equipment=Barbell&difficulty=3,4&q=press`
#[derive(Debug, Deserialize)]
pub struct ExerciseQuery {
    pub muscles: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub q: Option<String>,
}

fn parse_csv<T, F>(raw: Option<&str>, parse: F, what: &str) -> Result<HashSet<T>, String>
where
    T: Eq + Hash,
    F: Fn(&str) -> Option<T>,
{
    let mut out = HashSet::new();
    if let Some(raw) = raw {
        for tok in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let value = parse(tok).ok_or_else(|| format!("unknown {what}: '{tok}'"))?;
            out.insert(value);
        }
    }
    Ok(out)
}

impl ExerciseQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, String> {
        let mut criteria = FilterCriteria::default();
        criteria.set_muscle_groups(parse_csv(
            self.muscles.as_deref(),
            MuscleGroup::from_name,
            "muscle group",
        )?);
        criteria.set_equipment_types(parse_csv(
            self.equipment.as_deref(),
            EquipmentCategory::from_name,
            "equipment category",
        )?);
        criteria.set_difficulty(parse_csv(
            self.difficulty.as_deref(),
            |tok| tok.parse::<u8>().ok(),
            "difficulty",
        )?);
        criteria.set_search_text(self.q.unwrap_or_default());
        Ok(criteria)
    }
}

pub async fn list(
    catalog: web::Data<ExerciseCatalog>,
    query: web::Query<ExerciseQuery>,
) -> Result<HttpResponse, AppError> {
    let criteria = query.into_inner().into_criteria().map_err(AppError::BadRequest)?;
    Ok(HttpResponse::Ok().json(catalog.filter(&criteria)))
}

pub async fn detail(
    catalog: web::Data<ExerciseCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let exercise = catalog.get(&id).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(exercise))
}
