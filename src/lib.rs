/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::fmt::Debug;

pub mod backend;
pub mod book;
pub mod config;

pub use book::SystemAddressBook;

/// Identity backend tag carried by guest accounts. Guest members are
/// skipped during group enumeration and guest cards are excluded from
/// full listings.
pub const GUESTS_BACKEND: &str = "Guests";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
    pub backend: String,
    pub typ: Type,
    pub description: Option<String>,
    pub member_of: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    #[default]
    Individual,
    Group,
}

/// One user's contact card in the system address book. The card body is
/// opaque to the visibility policy, only the name is inspected.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    Backend(String),
    Group(String),
    Config(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[async_trait::async_trait]
pub trait AddressBookBackend: Sync + Send {
    /// Fetches a single card by name, `Ok(None)` on a miss.
    async fn card_by_name(&self, name: &str) -> Result<Option<Card>>;

    /// Fetches the cards matching any of `names`. Duplicate input names
    /// are permitted; each stored card is returned at most once, in
    /// stable backend order.
    async fn cards_by_name(&self, names: &[String]) -> Result<Vec<Card>>;

    async fn list_cards(&self) -> Result<Vec<Card>>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[async_trait::async_trait]
pub trait GroupDirectory: Sync + Send {
    async fn groups_of(&self, user: &Principal) -> Result<Vec<String>>;
    async fn members_of(&self, group: &str) -> Result<Vec<Principal>>;
}

#[async_trait::async_trait]
pub trait ConfigStore: Sync + Send {
    /// Reads a dynamic application setting, falling back to `default`
    /// when the key is not set.
    async fn app_value(&self, app: &str, key: &str, default: &str) -> Result<String>;
}

impl Principal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_guest(&self) -> bool {
        self.backend == GUESTS_BACKEND
    }
}

impl DirectoryError {
    pub fn backend(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(
            context = "addressbook",
            event = "error",
            source = "backend",
            reason = %reason,
            "Address book backend error"
        );
        DirectoryError::Backend(reason)
    }

    pub fn group(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(
            context = "addressbook",
            event = "error",
            source = "group",
            reason = %reason,
            "Group directory error"
        );
        DirectoryError::Group(reason)
    }

    pub fn config(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(
            context = "addressbook",
            event = "error",
            source = "config",
            reason = %reason,
            "Configuration store error"
        );
        DirectoryError::Config(reason)
    }
}

impl Debug for dyn AddressBookBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressBookBackend")
            .field("type", &self.type_name())
            .finish()
    }
}
