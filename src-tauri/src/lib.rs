// Course Admin - desktop course enrollment manager
// Module declarations
pub mod auth;
#[cfg(feature = "desktop")]
mod commands;
pub mod db;
pub mod error;
pub mod screens;
pub mod settings;
pub mod state;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::settings::AppSettings;
    use crate::state::AppState;
    use tauri::Manager;

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Get app data directory
            let app_dir = app.path().app_data_dir()?;
            let (settings, settings_warning) = AppSettings::load_or_default(&app_dir);

            app.handle().plugin(
                tauri_plugin_log::Builder::new()
                    .level(settings.logging.level_filter())
                    .build(),
            )?;

            match settings_warning {
                Some(reason) => log::warn!("{}; using default settings", reason),
                None => log::info!("Settings ready in {:?}", app_dir),
            }

            // Open the database once for the whole process
            match AppState::open(app_dir, settings) {
                Ok(app_state) => {
                    log::info!("Using course database {:?}", app_state.database_path());
                    app.manage(app_state);
                }
                Err(e) => {
                    log::error!("Startup failed: {:#}", e);
                    report_startup_failure(app, crate::state::startup_failure_message(&e));
                }
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::current_view,
            commands::open_admin_login,
            commands::open_student_login,
            commands::open_admin_setup,
            commands::submit_login,
            commands::cancel_login,
            commands::submit_admin_setup,
            commands::cancel_admin_setup,
            commands::refresh_courses,
            commands::delete_course,
            commands::open_add_course,
            commands::logout,
            commands::submit_add_course,
            commands::cancel_add_course,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        log::error!("error while running tauri application: {}", e);
        std::process::exit(1);
    }
}

/// Hide the main window and show an error dialog; the app exits once it is dismissed.
#[cfg(feature = "desktop")]
fn report_startup_failure(app: &tauri::App, message: String) {
    use tauri::Manager;
    use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

    if let Some(window) = app.get_webview_window("main") {
        let _ = window.hide();
    }

    let handle = app.handle().clone();
    app.dialog()
        .message(message)
        .kind(MessageDialogKind::Error)
        .title("Error")
        .show(move |_| handle.exit(1));
}
