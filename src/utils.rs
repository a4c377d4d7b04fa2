use crate::names;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!(
        "{name}={value}; HttpOnly; Max-Age={};{secure} Path=/; SameSite=Strict",
        names::SESSION_TTL_SECS
    )
}
