use contracts::system::auth::UserInfo;

use crate::shared::storage::{self, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const USER_KEY: &str = "user";

/// Persist a logged-in session.
pub fn save_session(access_token: &str, user: &UserInfo) -> Result<(), StorageError> {
    storage::set_string(ACCESS_TOKEN_KEY, access_token)?;
    storage::set_json(USER_KEY, user)
}

/// Restore a session. Both the token and the user record must be present and readable.
pub fn load_session() -> Option<(String, UserInfo)> {
    let token = match storage::get_string(ACCESS_TOKEN_KEY) {
        Ok(Some(token)) if !token.is_empty() => token,
        Ok(_) => return None,
        Err(err) => {
            log::warn!("session restore skipped: {err}");
            return None;
        }
    };
    match storage::get_json::<UserInfo>(USER_KEY) {
        Ok(Some(user)) => Some((token, user)),
        Ok(None) => None,
        Err(err) => {
            log::warn!("session restore skipped: {err}");
            None
        }
    }
}

/// Forget the stored session.
pub fn clear_session() {
    for key in [ACCESS_TOKEN_KEY, USER_KEY] {
        if let Err(err) = storage::remove(key) {
            log::error!("failed to clear {key}: {err}");
        }
    }
}

/// Whether a `storage` event key concerns the session.
pub fn is_session_key(key: &str) -> bool {
    key == ACCESS_TOKEN_KEY || key == USER_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_session_key() {
        assert!(is_session_key("accessToken"));
        assert!(is_session_key("user"));
        assert!(!is_session_key("diaries"));
    }
}
