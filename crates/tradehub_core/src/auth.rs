//! Demo authentication
//!
//! Two hardcoded accounts and a constant OTP. Nothing here is a security
//! mechanism: the "token" is a readable string and carries no signature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The only OTP the demo accepts.
pub const DEMO_OTP: &str = "123456";

const TOKEN_PREFIX: &str = "demo_token_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub company_code: &'static str,
    pub user_id: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub needs_otp: bool,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        company_code: "DEMO123",
        user_id: "demo_user",
        password: "demo123",
        role: Role::User,
        needs_otp: false,
    },
    DemoAccount {
        company_code: "BANK999",
        user_id: "demo_admin",
        password: "admin999",
        role: Role::Admin,
        needs_otp: true,
    },
];

/// The user object a client keeps for its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub company_code: String,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub role: Role,
}

impl DemoAccount {
    pub fn session_user(&self) -> SessionUser {
        SessionUser {
            company_code: self.company_code.to_string(),
            user_id: self.user_id.to_string(),
            role: self.role,
        }
    }

    pub fn token(&self) -> String {
        format!("{TOKEN_PREFIX}{}", self.user_id)
    }
}

/// Exact match against the demo accounts.
pub fn authenticate(company_code: &str, user_id: &str, password: &str) -> Option<&'static DemoAccount> {
    DEMO_ACCOUNTS.iter().find(|account| {
        account.company_code == company_code
            && account.user_id == user_id
            && account.password == password
    })
}

pub fn verify_otp(otp: &str) -> bool {
    otp == DEMO_OTP
}

/// Resolve a `demo_token_<userID>` token back to its account.
pub fn account_for_token(token: &str) -> Option<&'static DemoAccount> {
    let user_id = token.strip_prefix(TOKEN_PREFIX)?;
    DEMO_ACCOUNTS.iter().find(|account| account.user_id == user_id)
}

/// OTP request handle handed out by registration, e.g. `otp_1736899200000`.
pub fn otp_request_id(now_ms: i64) -> String {
    format!("otp_{now_ms}")
}
