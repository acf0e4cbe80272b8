// Tauri command handlers
use tauri::State;

use crate::error::{AppError, AppResult};
use crate::screens::add_course::CourseForm;
use crate::screens::admin_setup::AdminSetupForm;
use crate::screens::View;
use crate::state::AppState;

fn logged(result: AppResult<View>) -> AppResult<View> {
    if let Err(AppError::Storage(message)) = &result {
        log::error!("{}", message);
    }
    result
}

#[tauri::command]
pub fn current_view(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().view())
}

// ===== Main screen =====

#[tauri::command]
pub fn open_admin_login(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().open_admin_login())
}

#[tauri::command]
pub fn open_student_login(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().open_student_login())
}

#[tauri::command]
pub fn open_admin_setup(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().open_admin_setup())
}

// ===== Login =====

#[tauri::command]
pub fn submit_login(
    username: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<View, AppError> {
    logged(state.navigator.lock().submit_login(&username, &password))
}

#[tauri::command]
pub fn cancel_login(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().cancel_login())
}

// ===== Admin setup =====

#[tauri::command]
pub fn submit_admin_setup(
    form: AdminSetupForm,
    state: State<'_, AppState>,
) -> Result<View, AppError> {
    logged(state.navigator.lock().submit_admin_setup(form))
}

#[tauri::command]
pub fn cancel_admin_setup(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().cancel_admin_setup())
}

// ===== Dashboard =====

#[tauri::command]
pub fn refresh_courses(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().refresh())
}

#[tauri::command]
pub fn delete_course(course_id: i64, state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().delete_course(course_id))
}

#[tauri::command]
pub fn open_add_course(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().open_add_course())
}

#[tauri::command]
pub fn logout(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().logout())
}

// ===== Add course =====

#[tauri::command]
pub fn submit_add_course(
    form: CourseForm,
    state: State<'_, AppState>,
) -> Result<View, AppError> {
    logged(state.navigator.lock().submit_add_course(&form))
}

#[tauri::command]
pub fn cancel_add_course(state: State<'_, AppState>) -> Result<View, AppError> {
    logged(state.navigator.lock().cancel_add_course())
}
