#![warn(clippy::pedantic)]

use async_trait::async_trait;
use lacertus_domain::{AuthError, Credentials, ReadError, RemoteExercise, RemoteMuscle, Session};

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod rest;

/// The REST backend: the external exercise catalog and the auth endpoints.
#[async_trait(?Send)]
pub trait Storage {
    async fn read_muscles(&self) -> Result<Vec<RemoteMuscle>, ReadError>;
    async fn read_exercises(&self, muscle_id: u32) -> Result<Vec<RemoteExercise>, ReadError>;

    async fn log_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Client-side durable state.
#[async_trait(?Send)]
pub trait UI {
    async fn read_session(&self) -> Result<Option<Session>, ReadError>;
    async fn write_session(&self, session: &Session) -> Result<(), ReadError>;
    async fn delete_session(&self) -> Result<(), ReadError>;
}
