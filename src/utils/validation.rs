/// Shortest password we accept at registration, in UTF-16 code units.
///
/// Code units rather than chars so existing browser clients, which measure the
/// same way, agree with us on what "six long" means.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Registration input that passed the presence and length checks.
#[derive(Debug, PartialEq, Eq)]
pub struct Credentials {
    /// Already lowercased.
    pub username: String,
    pub password: String,
}

/// Checks registration input.
///
/// Rules:
/// 1. Both fields present and non-empty
/// 2. Password at least `MIN_PASSWORD_LENGTH` UTF-16 code units long
///
/// The username comes back lowercased so lookups and the UNIQUE constraint agree
/// on what "the same user" means.
pub fn validate_registration(
    username: Option<&str>,
    password: Option<&str>,
) -> Option<Credentials> {
    let username = username.filter(|u| !u.is_empty())?;
    let password = password.filter(|p| p.encode_utf16().count() >= MIN_PASSWORD_LENGTH)?;

    Some(Credentials {
        username: normalize_username(username),
        password: password.to_string(),
    })
}

/// Login only checks presence. Length rules apply at registration.
pub fn validate_login(username: Option<&str>, password: Option<&str>) -> Option<Credentials> {
    let username = username.filter(|u| !u.is_empty())?;
    let password = password.filter(|p| !p.is_empty())?;

    Some(Credentials {
        username: normalize_username(username),
        password: password.to_string(),
    })
}

pub fn normalize_username(username: &str) -> String {
    username.to_lowercase()
}
