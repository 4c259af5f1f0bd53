use contracts::system::auth::{
    CreateUserData, CreateUserInput, CreateUserVariables, FetchUserLoggedInData, GraphQlRequest,
    GraphQlResponse, LoginRequest, LoginUserData, UserInfo, CREATE_USER_MUTATION,
    FETCH_USER_LOGGED_IN_QUERY, LOGIN_USER_MUTATION,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::graphql_endpoint;

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("{0}")]
    GraphQl(String),
}

async fn post_graphql<V, T>(
    query: &str,
    variables: V,
    access_token: Option<&str>,
) -> Result<T, AuthApiError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let body = GraphQlRequest { query, variables };

    let mut builder = Request::post(graphql_endpoint());
    if let Some(token) = access_token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .json(&body)
        .map_err(|e| AuthApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(AuthApiError::Status(response.status()));
    }

    response
        .json::<GraphQlResponse<T>>()
        .await
        .map_err(|e| AuthApiError::Decode(e.to_string()))?
        .into_result()
        .map_err(AuthApiError::GraphQl)
}

/// Exchange credentials for an access token.
pub async fn login_user(email: String, password: String) -> Result<String, AuthApiError> {
    let data: LoginUserData =
        post_graphql(LOGIN_USER_MUTATION, LoginRequest { email, password }, None).await?;
    Ok(data.login_user.access_token)
}

/// Resolve the user behind `access_token`.
pub async fn fetch_user_logged_in(access_token: &str) -> Result<UserInfo, AuthApiError> {
    let data: FetchUserLoggedInData = post_graphql(
        FETCH_USER_LOGGED_IN_QUERY,
        serde_json::json!({}),
        Some(access_token),
    )
    .await?;
    Ok(data.fetch_user_logged_in)
}

/// Register an account. Returns the new user id.
pub async fn create_user(input: CreateUserInput) -> Result<String, AuthApiError> {
    let data: CreateUserData = post_graphql(
        CREATE_USER_MUTATION,
        CreateUserVariables {
            create_user_input: input,
        },
        None,
    )
    .await?;
    Ok(data.create_user.id)
}
