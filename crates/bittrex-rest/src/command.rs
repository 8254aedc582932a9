//! Command registry
//!
//! Every command the client can send is listed here exactly once, either as
//! public (`pub/` path, unsigned) or private (`key/` path, signed). Lookups
//! are case-sensitive: the exchange spells `GetTicks` in camel case.

use std::fmt;

/// Access class of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Unsigned request under `pub/`
    Public,
    /// Signed request under `key/`, needs key and secret
    Private,
}

impl Access {
    /// Path segment that follows the API version
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Public => "pub",
            Self::Private => "key",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Commands served under `pub/`
pub const PUBLIC_COMMANDS: &[&str] = &[
    "getmarkets",
    "getmarketsummary",
    "getmarketsummaries",
    "getcurrencies",
    "getwallethealth",
    "getmarketorderbook",
    "GetTicks",
];

/// Commands served under `key/`
pub const PRIVATE_COMMANDS: &[&str] = &[
    "getorder",
    "getopenorders",
    "getorderhistory",
    "getbalance",
    "getbalances",
    "tradecancel",
    "withdrawcurrency",
    "tradebuy",
    "tradesell",
    "getwithdrawalhistory",
    "getdeposithistory",
    "getpendingdeposits",
    "getdepositaddress",
    "generatedepositaddress",
];

/// Classify a command, or `None` if the registry does not know it
pub fn classify(command: &str) -> Option<Access> {
    if PUBLIC_COMMANDS.contains(&command) {
        Some(Access::Public)
    } else if PRIVATE_COMMANDS.contains(&command) {
        Some(Access::Private)
    } else {
        None
    }
}
