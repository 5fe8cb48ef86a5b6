use std::sync::Arc;

use log::{debug, error};
use seed::app::Orders;

use lacertus_domain as domain;
use lacertus_storage as storage;

// ------ ------
//     Init
// ------ ------

pub fn init(orders: &mut impl Orders<Msg>) -> Model {
    orders.send_msg(Msg::ReadSession);

    Model {
        storage: Arc::new(storage::rest::Storage),
        session_cache: Arc::new(storage::local_storage::UI),
        session: None,
    }
}

// ------ ------
//     Model
// ------ ------

pub struct Model {
    pub storage: Arc<dyn storage::Storage>,
    session_cache: Arc<dyn storage::UI>,
    pub session: Option<domain::Session>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

// ------ ------
//    Update
// ------ ------

#[derive(Clone)]
pub enum Msg {
    ReadSession,
    SessionRead(Result<Option<domain::Session>, String>),

    LogIn(domain::Credentials),
    SignUp(domain::Credentials),
    SessionReceived(AuthMode, Result<domain::Session, String>),

    WriteSession,
    SessionWritten(Result<(), String>),

    DeleteSession,
    SessionDeleted(Result<(), String>),
}

#[derive(Clone)]
pub enum Event {
    LoggedIn(AuthMode),
    AuthFailed(String),
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::ReadSession => {
            let session_cache = model.session_cache.clone();
            orders.skip().perform_cmd(async move {
                Msg::SessionRead(
                    session_cache
                        .read_session()
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::SessionRead(Ok(session)) => {
            model.session = session;
        }
        Msg::SessionRead(Err(message)) => {
            // The stored entries have already been cleared by the cache.
            debug!("Failed to restore session: {message}");
        }

        Msg::LogIn(credentials) => {
            let storage = model.storage.clone();
            orders.skip().perform_cmd(async move {
                Msg::SessionReceived(
                    AuthMode::Login,
                    storage
                        .log_in(&credentials)
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::SignUp(credentials) => {
            let storage = model.storage.clone();
            orders.skip().perform_cmd(async move {
                Msg::SessionReceived(
                    AuthMode::Signup,
                    storage
                        .sign_up(&credentials)
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::SessionReceived(mode, Ok(session)) => {
            model.session = Some(session);
            orders
                .send_msg(Msg::WriteSession)
                .notify(Event::LoggedIn(mode));
        }
        Msg::SessionReceived(_, Err(message)) => {
            orders.skip().notify(Event::AuthFailed(message));
        }

        Msg::WriteSession => {
            let Some(session) = model.session.clone() else {
                return;
            };
            let session_cache = model.session_cache.clone();
            orders.skip().perform_cmd(async move {
                Msg::SessionWritten(
                    session_cache
                        .write_session(&session)
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::SessionWritten(result) => {
            if let Err(message) = result {
                error!("Failed to store session: {message}");
            }
        }

        Msg::DeleteSession => {
            model.session = None;
            let session_cache = model.session_cache.clone();
            orders.perform_cmd(async move {
                Msg::SessionDeleted(
                    session_cache
                        .delete_session()
                        .await
                        .map_err(|err| err.to_string()),
                )
            });
        }
        Msg::SessionDeleted(result) => {
            if let Err(message) = result {
                error!("Failed to clear stored session: {message}");
            }
        }
    }
}
