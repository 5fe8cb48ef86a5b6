pub mod auth_dialog;
pub mod exercise_panel;
