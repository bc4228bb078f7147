//! Owning account identifiers.

use std::fmt;

/// 32-byte key of the account that placed an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UserAccount([u8; 32]);

impl UserAccount {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for UserAccount {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Signature identifying an order across the whole book: `<account>-<order_id>`
pub fn order_signature(order_id: u32, user_account: &UserAccount) -> String {
    format!("{user_account}-{order_id}")
}
