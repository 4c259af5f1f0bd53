//! URL table of the app and the access level of each page.

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const DIARIES_PATH: &str = "/diaries";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessType {
    Public,
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKey {
    Login,
    Signup,
    Diaries,
    DiaryDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMeta {
    pub key: UrlKey,
    /// Path pattern; `:name` segments match any single non-empty segment.
    pub pattern: &'static str,
    pub access: AccessType,
}

pub const URLS: [UrlMeta; 4] = [
    UrlMeta {
        key: UrlKey::Login,
        pattern: LOGIN_PATH,
        access: AccessType::Public,
    },
    UrlMeta {
        key: UrlKey::Signup,
        pattern: SIGNUP_PATH,
        access: AccessType::Public,
    },
    UrlMeta {
        key: UrlKey::Diaries,
        pattern: DIARIES_PATH,
        access: AccessType::Public,
    },
    UrlMeta {
        key: UrlKey::DiaryDetail,
        pattern: "/diaries/:id",
        access: AccessType::Authenticated,
    },
];

pub fn diary_detail_url(id: i64) -> String {
    format!("{DIARIES_PATH}/{id}")
}

fn matches(pattern: &str, path: &str) -> bool {
    let path = path.split(|c| c == '?' || c == '#').next().unwrap_or(path);
    let path = path.trim_end_matches('/');
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') => {
                if s.is_empty() {
                    return false;
                }
            }
            (Some(p), Some(s)) if p == s => {}
            _ => return false,
        }
    }
}

pub fn url_meta_by_path(path: &str) -> Option<&'static UrlMeta> {
    URLS.iter().find(|meta| matches(meta.pattern, path))
}

/// Unknown paths are public.
pub fn requires_auth(path: &str) -> bool {
    url_meta_by_path(path)
        .map(|meta| meta.access == AccessType::Authenticated)
        .unwrap_or(false)
}
