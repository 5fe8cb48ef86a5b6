use std::collections::VecDeque;

use async_trait::async_trait;
use gloo_storage::Storage as GlooStorage;
use lacertus_domain::{AccessToken, ReadError, Session, User};
use lacertus_web_app::log;

pub struct UI;

const KEY_USER: &str = "user";
const KEY_TOKEN: &str = "token";

#[async_trait(?Send)]
impl super::UI for UI {
    async fn read_session(&self) -> Result<Option<Session>, ReadError> {
        let token: String = match gloo_storage::LocalStorage::get(KEY_TOKEN) {
            Ok(token) => token,
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => return Ok(None),
            Err(err) => {
                clear();
                return Err(ReadError::Other(Box::new(err)));
            }
        };
        let user: User = match gloo_storage::LocalStorage::get(KEY_USER) {
            Ok(user) => user,
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => return Ok(None),
            Err(err) => {
                clear();
                return Err(ReadError::Other(Box::new(err)));
            }
        };
        Ok(Some(Session {
            user,
            token: AccessToken::new(token),
        }))
    }

    async fn write_session(&self, session: &Session) -> Result<(), ReadError> {
        gloo_storage::LocalStorage::set(KEY_USER, &session.user)
            .map_err(|err| ReadError::Other(Box::new(err)))?;
        gloo_storage::LocalStorage::set(KEY_TOKEN, session.token.as_ref())
            .map_err(|err| ReadError::Other(Box::new(err)))
    }

    async fn delete_session(&self) -> Result<(), ReadError> {
        clear();
        Ok(())
    }
}

fn clear() {
    gloo_storage::LocalStorage::delete(KEY_USER);
    gloo_storage::LocalStorage::delete(KEY_TOKEN);
}

pub struct Log;

const KEY_LOG: &str = "log";
const MAX_LOG_ENTRIES: usize = 100;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_LOG_ENTRIES);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
