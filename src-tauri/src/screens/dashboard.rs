// Dashboard course table
use serde::Serialize;

use crate::db::connection::DatabaseConnection;
use crate::db::models::Course;
use crate::db::operations::DbOperations;

pub const COLUMNS: [&str; 5] = ["ID", "Course Name", "Course Code", "Min CGPA", "Credits"];

/// What the dashboard table renders: headers plus one row per course.
/// Every row gets a Delete action in the webview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Course>,
}

impl CourseTable {
    pub fn load(db: &DatabaseConnection) -> Result<Self, anyhow::Error> {
        let rows = DbOperations::get_all_courses(db)?;
        log::debug!("Loaded {} course(s) for the dashboard", rows.len());

        Ok(Self {
            columns: COLUMNS.to_vec(),
            rows,
        })
    }
}
