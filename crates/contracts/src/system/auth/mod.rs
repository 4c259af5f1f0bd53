use anyhow::bail;
use serde::{Deserialize, Serialize};

pub const PASSWORD_MIN_LEN: usize = 8;

/// `loginUser` mutation: exchanges credentials for an access token.
pub const LOGIN_USER_MUTATION: &str = r#"
mutation loginUser($email: String!, $password: String!) {
  loginUser(email: $email, password: $password) {
    accessToken
  }
}
"#;

/// `fetchUserLoggedIn` query: resolves the user behind a bearer token.
pub const FETCH_USER_LOGGED_IN_QUERY: &str = r#"
query fetchUserLoggedIn {
  fetchUserLoggedIn {
    _id
    email
    name
  }
}
"#;

/// `createUser` mutation: registers a new account and returns its id.
pub const CREATE_USER_MUTATION: &str = r#"
mutation createUser($createUserInput: CreateUserInput!) {
  createUser(createUserInput: $createUserInput) {
    _id
  }
}
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserData {
    #[serde(rename = "loginUser")]
    pub login_user: LoginResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchUserLoggedInData {
    #[serde(rename = "fetchUserLoggedIn")]
    pub fetch_user_logged_in: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserVariables {
    pub create_user_input: CreateUserInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUser {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub create_user: CreatedUser,
}

/// Signup form as typed by the user, before it becomes a `CreateUserInput`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
}

impl SignupForm {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.email.trim().is_empty() {
            bail!("Enter your email.");
        }
        if !self.email.contains('@') {
            bail!("Email must contain '@'.");
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            bail!("Password must be at least {PASSWORD_MIN_LEN} characters.");
        }
        let has_letter = self.password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = self.password.chars().any(|c| c.is_ascii_digit());
        if !(has_letter && has_digit) {
            bail!("Password must contain both letters and digits.");
        }
        if self.password_confirm.is_empty() {
            bail!("Confirm your password.");
        }
        if self.name.trim().is_empty() {
            bail!("Enter your name.");
        }
        if self.password != self.password_confirm {
            bail!("Passwords do not match.");
        }
        Ok(())
    }

    pub fn into_input(self) -> CreateUserInput {
        CreateUserInput {
            email: self.email,
            password: self.password,
            name: self.name,
        }
    }
}

/// Standard GraphQL request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Standard GraphQL response envelope. A response may carry data, errors, or both.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Collapse the envelope: the first error wins over partial data.
    pub fn into_result(self) -> Result<T, String> {
        if let Some(err) = self.errors.into_iter().next() {
            return Err(err.message);
        }
        self.data
            .ok_or_else(|| "GraphQL response contained no data".to_string())
    }
}
