use rusqlite::{params, OptionalExtension};
use crate::db::connection::DatabaseConnection;
use crate::db::models::{AdminCredential, Course, NewCourse};

/// Database operations for course and credential records
pub struct DbOperations;

impl DbOperations {
    /// Insert a course and return its new id
    pub fn add_course(
        db: &DatabaseConnection,
        course: &NewCourse,
    ) -> Result<i64, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        conn.execute(
            "INSERT INTO courses (course_name, course_code, min_cgpa, credits) VALUES (?1, ?2, ?3, ?4)",
            params![course.name, course.code, course.min_cgpa, course.credits],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Delete a course by id. Returns whether a row was removed.
    pub fn delete_course(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<bool, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        let removed = conn.execute("DELETE FROM courses WHERE id = ?1", params![course_id])?;

        Ok(removed > 0)
    }

    /// Get all courses in insertion order
    pub fn get_all_courses(
        db: &DatabaseConnection,
    ) -> Result<Vec<Course>, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        let mut stmt = conn.prepare(
            "SELECT id, course_name, course_code, min_cgpa, credits
             FROM courses
             ORDER BY id"
        )?;

        let courses = stmt.query_map([], |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                code: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                min_cgpa: row.get::<_, Option<f64>>(3)?.unwrap_or_default(),
                credits: row.get::<_, Option<i64>>(4)?.unwrap_or_default(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

        Ok(courses)
    }

    /// Count stored courses
    pub fn count_courses(db: &DatabaseConnection) -> Result<i64, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get the first stored admin credential, if any
    pub fn get_admin_credential(
        db: &DatabaseConnection,
    ) -> Result<Option<AdminCredential>, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        let credential = conn
            .query_row(
                "SELECT id, username, password_hash FROM admin_credentials ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok(AdminCredential {
                        id: row.get(0)?,
                        username: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        password_hash: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;

        Ok(credential)
    }

    /// Store an admin credential. `password_hash` must already be the hex digest.
    pub fn set_admin_credential(
        db: &DatabaseConnection,
        username: &str,
        password_hash: &str,
    ) -> Result<i64, anyhow::Error> {
        let conn = db.get_connection();
        let conn = conn.lock();

        conn.execute(
            "INSERT INTO admin_credentials (username, password_hash) VALUES (?1, ?2)",
            params![username, password_hash],
        )?;

        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, code: &str, min_cgpa: f64, credits: i64) -> NewCourse {
        NewCourse {
            name: name.to_string(),
            code: code.to_string(),
            min_cgpa,
            credits,
        }
    }

    #[test]
    fn test_add_then_list_round_trip() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        let id = DbOperations::add_course(&db, &course("Algorithms", "CS301", 3.0, 4)).unwrap();

        let courses = DbOperations::get_all_courses(&db).unwrap();
        assert_eq!(
            courses,
            vec![Course {
                id,
                name: "Algorithms".to_string(),
                code: "CS301".to_string(),
                min_cgpa: 3.0,
                credits: 4,
            }]
        );
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        let a = DbOperations::add_course(&db, &course("Physics", "PH100", 2.0, 3)).unwrap();
        let b = DbOperations::add_course(&db, &course("Physics", "PH100", 2.0, 3)).unwrap();
        assert_ne!(a, b);

        let ids: Vec<i64> = DbOperations::get_all_courses(&db)
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_out_of_range_values_are_accepted() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        DbOperations::add_course(&db, &course("Odd", "X0", -1.5, -2)).unwrap();

        let stored = &DbOperations::get_all_courses(&db).unwrap()[0];
        assert_eq!(stored.min_cgpa, -1.5);
        assert_eq!(stored.credits, -2);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        let keep = DbOperations::add_course(&db, &course("Chemistry", "CH110", 2.5, 3)).unwrap();
        let removed = DbOperations::add_course(&db, &course("Biology", "BI120", 2.0, 4)).unwrap();

        assert!(DbOperations::delete_course(&db, removed).unwrap());

        let remaining = DbOperations::get_all_courses(&db).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        DbOperations::add_course(&db, &course("History", "HI200", 2.0, 2)).unwrap();
        let before = DbOperations::get_all_courses(&db).unwrap();

        assert!(!DbOperations::delete_course(&db, 9999).unwrap());
        assert_eq!(DbOperations::get_all_courses(&db).unwrap(), before);
    }

    #[test]
    fn test_credential_absent_by_default() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        assert_eq!(DbOperations::get_admin_credential(&db).unwrap(), None);
    }

    #[test]
    fn test_set_credential_binds_username_and_hash() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        DbOperations::set_admin_credential(&db, "admin", "abc123").unwrap();

        let stored = DbOperations::get_admin_credential(&db).unwrap().unwrap();
        assert_eq!(stored.username, "admin");
        assert_eq!(stored.password_hash, "abc123");
    }

    #[test]
    fn test_first_credential_wins() {
        let db = DatabaseConnection::open_in_memory().unwrap();
        DbOperations::set_admin_credential(&db, "first", "h1").unwrap();
        DbOperations::set_admin_credential(&db, "second", "h2").unwrap();

        let stored = DbOperations::get_admin_credential(&db).unwrap().unwrap();
        assert_eq!(stored.username, "first");
    }
}
