use async_trait::async_trait;
use gloo_net::http::Request;
use lacertus_domain::{
    AccessToken, AuthError, Credentials, ReadError, RemoteExercise, RemoteMuscle, Session,
    StorageError, User,
};
use serde::Deserialize;
use serde_json::json;

pub struct Storage;

#[async_trait(?Send)]
impl super::Storage for Storage {
    async fn read_muscles(&self) -> Result<Vec<RemoteMuscle>, ReadError> {
        Ok(
            fetch::<Results<RemoteMuscle>>(Request::get("api/muscles").build().unwrap())
                .await?
                .results,
        )
    }

    async fn read_exercises(&self, muscle_id: u32) -> Result<Vec<RemoteExercise>, ReadError> {
        Ok(fetch::<Results<RemoteExercise>>(
            Request::get(&format!("api/exercises?muscle={muscle_id}"))
                .build()
                .unwrap(),
        )
        .await?
        .results)
    }

    async fn log_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        authenticate("api/auth/login", credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        authenticate("api/auth/signup", credentials).await
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct Results<T> {
    #[serde(default)]
    results: Vec<T>,
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
    access_token: String,
}

#[derive(Deserialize, Default)]
struct AuthErrorBody {
    message: Option<String>,
    msg: Option<String>,
}

const AUTH_ERROR_FALLBACK: &str = "Erreur d'authentification";

async fn authenticate(url: &str, credentials: &Credentials) -> Result<Session, AuthError> {
    let request = Request::post(url)
        .json(&json!({
            "email": credentials.email,
            "password": credentials.password,
        }))
        .expect("serialization failed");
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<AuthResponse>().await {
                    Ok(data) => Ok(Session {
                        user: data.user,
                        token: AccessToken::new(data.access_token),
                    }),
                    Err(error) => Err(AuthError::Other(Box::new(error))),
                }
            } else {
                let body = response.json::<AuthErrorBody>().await.unwrap_or_default();
                Err(AuthError::Rejected(
                    body.message
                        .or(body.msg)
                        .unwrap_or_else(|| AUTH_ERROR_FALLBACK.to_string()),
                ))
            }
        }
        Err(_) => Err(StorageError::NoConnection.into()),
    }
}

async fn fetch<T>(request: Request) -> Result<T, ReadError>
where
    T: 'static + for<'de> serde::Deserialize<'de>,
{
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<T>().await {
                    Ok(data) => Ok(data),
                    Err(error) => Err(ReadError::Other(Box::new(error))),
                }
            } else {
                Err(ReadError::Other(
                    format!("{} {}", response.status(), response.status_text()).into(),
                ))
            }
        }
        Err(_) => Err(StorageError::NoConnection.into()),
    }
}
