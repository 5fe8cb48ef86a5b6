#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod muscle;
mod session;
mod text;

pub use error::{AuthError, ReadError, StorageError};
pub use exercise::{
    Difficulty, ExercisePreview, MAX_EXERCISES, RemoteExercise, RemoteExerciseImage,
    TARGET_LANGUAGE_ID, Translation, previews,
};
pub use muscle::{MuscleGroup, RemoteMuscle, ResolvedMuscle, Side, find_muscle};
pub use session::{AccessToken, Credentials, Session, User};
pub use text::{strip_html, trim_text};
