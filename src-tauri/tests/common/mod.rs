//! Test harness and fixtures for course admin integration tests.
#![allow(dead_code)]

use course_admin_lib::auth::hash_password;
use course_admin_lib::db::connection::DatabaseConnection;
use course_admin_lib::db::models::Course;
use course_admin_lib::db::operations::DbOperations;
use course_admin_lib::screens::add_course::CourseForm;
use course_admin_lib::screens::{Navigator, Screen, View};

/// Test harness wrapping a navigator over its own database.
pub struct TestHarness {
    pub db: DatabaseConnection,
    pub nav: Navigator,
}

impl TestHarness {
    /// Empty in-memory database, no admin configured.
    pub fn new() -> Self {
        Self::over(DatabaseConnection::open_in_memory().unwrap())
    }

    /// In-memory database with the admin/secret credential stored.
    pub fn with_admin() -> Self {
        let harness = Self::new();
        DbOperations::set_admin_credential(&harness.db, "admin", &hash_password("secret")).unwrap();
        harness
    }

    pub fn over(db: DatabaseConnection) -> Self {
        TestHarness {
            nav: Navigator::new(db.clone()),
            db,
        }
    }

    /// Log in as admin/secret and land on the dashboard.
    pub fn logged_in() -> Self {
        let mut harness = Self::with_admin();
        harness.nav.open_admin_login().unwrap();
        let view = harness.nav.submit_login("admin", "secret").unwrap();
        assert_eq!(view.screen, Screen::Dashboard);
        harness
    }

    /// Add a course through the dialog, starting from the dashboard.
    pub fn add_course(&mut self, name: &str, code: &str, min_cgpa: &str, credits: &str) -> View {
        self.nav.open_add_course().unwrap();
        self.nav.submit_add_course(&form(name, code, min_cgpa, credits)).unwrap()
    }

    pub fn stored_courses(&self) -> Vec<Course> {
        DbOperations::get_all_courses(&self.db).unwrap()
    }
}

pub fn form(name: &str, code: &str, min_cgpa: &str, credits: &str) -> CourseForm {
    CourseForm {
        name: name.to_string(),
        code: code.to_string(),
        min_cgpa: min_cgpa.to_string(),
        credits: credits.to_string(),
    }
}

/// Rows rendered by the dashboard table in `view`.
pub fn table_rows(view: &View) -> Vec<Course> {
    view.table.as_ref().map(|t| t.rows.clone()).unwrap_or_default()
}
