// Data models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub min_cgpa: f64,
    pub credits: i64,
}

/// A course that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub min_cgpa: f64,
    pub credits: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub id: i64,
    pub username: String,
    pub password_hash: String, // lowercase hex SHA-256
}
