// Add-course dialog input
use serde::Deserialize;

use crate::db::models::NewCourse;
use crate::error::{AppError, AppResult};

/// Raw text from the four add-course fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    pub name: String,
    pub code: String,
    pub min_cgpa: String,
    pub credits: String,
}

impl CourseForm {
    /// Coerce the numeric fields. Name and code are stored as typed.
    pub fn parse(&self) -> AppResult<NewCourse> {
        let min_cgpa = parse_min_cgpa(&self.min_cgpa)?;
        let credits = parse_credits(&self.credits)?;

        Ok(NewCourse {
            name: self.name.clone(),
            code: self.code.clone(),
            min_cgpa,
            credits,
        })
    }
}

fn parse_min_cgpa(raw: &str) -> AppResult<f64> {
    // SQLite stores NaN as NULL, so non-finite values are rejected along with garbage
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::validation(format!(
            "Min CGPA must be a decimal number, got \"{}\"",
            raw
        ))),
    }
}

fn parse_credits(raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::validation(format!("Credits must be a whole number, got \"{}\"", raw))
    })
}
