// Screen state machine
//
// Every user action in the webview maps to one `Navigator` method. The method
// performs the transition, talks to the database, and hands back a `View` that
// the webview renders as-is.

pub mod add_course;
pub mod admin_setup;
pub mod dashboard;

use serde::Serialize;

use crate::auth::verify_login;
use crate::db::connection::DatabaseConnection;
use crate::db::operations::DbOperations;
use crate::error::{AppError, AppResult};

use add_course::CourseForm;
use admin_setup::AdminSetupForm;
use dashboard::CourseTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Main,
    Login,
    AdminSetup,
    Dashboard,
    AddCourse,
}

impl Screen {
    fn label(&self) -> &'static str {
        match self {
            Screen::Main => "main screen",
            Screen::Login => "login dialog",
            Screen::AdminSetup => "admin setup dialog",
            Screen::Dashboard => "dashboard",
            Screen::AddCourse => "add course dialog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A dismissible message the webview shows before anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn info(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    fn warning(title: &str, message: String) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.to_string(),
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub screen: Screen,
    pub admin_configured: bool,
    /// Present on the dashboard and while the add dialog sits on top of it.
    pub table: Option<CourseTable>,
    pub notice: Option<Notice>,
}

pub struct Navigator {
    db: DatabaseConnection,
    screen: Screen,
    table: Option<CourseTable>,
}

impl Navigator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            screen: Screen::Main,
            table: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn view(&self) -> AppResult<View> {
        self.view_with(None)
    }

    fn view_with(&self, notice: Option<Notice>) -> AppResult<View> {
        let admin_configured = DbOperations::get_admin_credential(&self.db)?.is_some();

        Ok(View {
            screen: self.screen,
            admin_configured,
            table: self.table.clone(),
            notice,
        })
    }

    fn require(&self, expected: Screen, action: &str) -> AppResult<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Cannot {} from the {}",
                action,
                self.screen.label()
            )))
        }
    }

    fn go_to(&mut self, screen: Screen) {
        log::debug!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    fn enter_dashboard(&mut self) -> AppResult<()> {
        self.table = Some(CourseTable::load(&self.db)?);
        self.go_to(Screen::Dashboard);
        Ok(())
    }

    fn leave_to_main(&mut self) {
        self.table = None;
        self.go_to(Screen::Main);
    }

    // ===== Main screen =====

    pub fn open_admin_login(&mut self) -> AppResult<View> {
        self.require(Screen::Main, "open admin login")?;
        self.go_to(Screen::Login);
        self.view()
    }

    pub fn open_student_login(&mut self) -> AppResult<View> {
        self.require(Screen::Main, "open student login")?;
        self.view_with(Some(Notice::info(
            "Student Login",
            "The student portal is not available.",
        )))
    }

    pub fn open_admin_setup(&mut self) -> AppResult<View> {
        self.require(Screen::Main, "open admin setup")?;
        if DbOperations::get_admin_credential(&self.db)?.is_some() {
            return Err(AppError::validation("An admin account is already configured"));
        }
        self.go_to(Screen::AdminSetup);
        self.view()
    }

    // ===== Login dialog =====

    /// Closes the dialog either way: success opens the dashboard, failure
    /// returns to the main screen with a warning.
    pub fn submit_login(&mut self, username: &str, password: &str) -> AppResult<View> {
        self.require(Screen::Login, "log in")?;

        let stored = DbOperations::get_admin_credential(&self.db)?;
        match verify_login(stored.as_ref(), username, password) {
            Ok(()) => {
                log::info!("Admin '{}' logged in", username);
                self.enter_dashboard()?;
                self.view()
            }
            Err(failure) => {
                log::warn!("Login rejected for '{}': {}", username, failure);
                self.leave_to_main();
                self.view_with(Some(Notice::warning(failure.title(), failure.to_string())))
            }
        }
    }

    pub fn cancel_login(&mut self) -> AppResult<View> {
        self.require(Screen::Login, "cancel login")?;
        self.leave_to_main();
        self.view()
    }

    // ===== Admin setup dialog =====

    pub fn submit_admin_setup(&mut self, form: AdminSetupForm) -> AppResult<View> {
        self.require(Screen::AdminSetup, "set up an admin")?;
        if DbOperations::get_admin_credential(&self.db)?.is_some() {
            return Err(AppError::validation("An admin account is already configured"));
        }

        let (username, password_hash) = form.into_credential()?;
        DbOperations::set_admin_credential(&self.db, &username, &password_hash)?;
        log::info!("Admin account '{}' created", username);

        self.leave_to_main();
        self.view_with(Some(Notice::info(
            "Admin Setup",
            "Admin account created. You can now log in.",
        )))
    }

    pub fn cancel_admin_setup(&mut self) -> AppResult<View> {
        self.require(Screen::AdminSetup, "cancel admin setup")?;
        self.leave_to_main();
        self.view()
    }

    // ===== Dashboard =====

    pub fn refresh(&mut self) -> AppResult<View> {
        self.require(Screen::Dashboard, "refresh courses")?;
        self.enter_dashboard()?;
        self.view()
    }

    /// Deletes without confirmation, then reloads the table.
    pub fn delete_course(&mut self, course_id: i64) -> AppResult<View> {
        self.require(Screen::Dashboard, "delete a course")?;

        if DbOperations::delete_course(&self.db, course_id)? {
            log::info!("Deleted course {}", course_id);
        } else {
            log::debug!("Course {} already absent", course_id);
        }

        self.enter_dashboard()?;
        self.view()
    }

    pub fn open_add_course(&mut self) -> AppResult<View> {
        self.require(Screen::Dashboard, "add a course")?;
        self.go_to(Screen::AddCourse);
        self.view()
    }

    pub fn logout(&mut self) -> AppResult<View> {
        self.require(Screen::Dashboard, "log out")?;
        log::info!("Admin logged out");
        self.leave_to_main();
        self.view()
    }

    // ===== Add course dialog =====

    /// A validation error keeps the dialog open and inserts nothing.
    pub fn submit_add_course(&mut self, form: &CourseForm) -> AppResult<View> {
        self.require(Screen::AddCourse, "submit a course")?;

        let course = form.parse()?;
        let id = DbOperations::add_course(&self.db, &course)?;
        log::info!("Added course {} ({})", id, course.code);

        // The row is stored; close the dialog even if the reload below fails
        self.table = None;
        self.go_to(Screen::Dashboard);
        self.enter_dashboard()?;
        self.view()
    }

    pub fn cancel_add_course(&mut self) -> AppResult<View> {
        self.require(Screen::AddCourse, "cancel adding a course")?;
        self.go_to(Screen::Dashboard);
        self.view()
    }
}
