//! Request and response bodies for the portal API.

use crate::model::{Role, User};
use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful `POST /login` response. `user` is optional on the wire and a
/// response without one is rejected by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `PUT /user/update`: the profile form plus the user id.
///
/// Fields are sent as typed in; empty optional fields go out as `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub role: String,
}
