// Application state management
use parking_lot::Mutex;
use std::path::PathBuf;

use crate::db::connection::DatabaseConnection;
use crate::db::operations::DbOperations;
use crate::screens::Navigator;
use crate::settings::AppSettings;

/// Everything the command handlers share. Built once at startup; the database
/// connection is released when this drops at shutdown.
pub struct AppState {
    pub navigator: Mutex<Navigator>,
    pub db: DatabaseConnection,
    pub settings: AppSettings,
    pub app_dir: PathBuf,
}

impl AppState {
    /// Write first-run settings if none exist yet, then open the database.
    pub fn open(app_dir: PathBuf, settings: AppSettings) -> anyhow::Result<Self> {
        if !AppSettings::exists(&app_dir) {
            settings.save(&app_dir).map_err(anyhow::Error::msg)?;
        }

        let db = DatabaseConnection::new(settings.database_path(&app_dir))?;
        log::info!("{} course(s) on file", DbOperations::count_courses(&db)?);

        Ok(Self {
            navigator: Mutex::new(Navigator::new(db.clone())),
            db,
            settings,
            app_dir,
        })
    }

    /// Resolved location of the course database
    pub fn database_path(&self) -> PathBuf {
        self.settings.database_path(&self.app_dir)
    }
}

/// Text for the blocking dialog shown when startup cannot open storage.
pub fn startup_failure_message(err: &anyhow::Error) -> String {
    format!("The course database could not be opened.\n\n{:#}", err)
}
