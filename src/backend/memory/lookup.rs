/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ahash::AHashSet;

use crate::{AddressBookBackend, Card, ConfigStore, GroupDirectory, Principal, Type};

use super::MemoryDirectory;

#[async_trait::async_trait]
impl AddressBookBackend for MemoryDirectory {
    async fn card_by_name(&self, name: &str) -> crate::Result<Option<Card>> {
        Ok(self.cards.iter().find(|card| card.name == name).cloned())
    }

    async fn cards_by_name(&self, names: &[String]) -> crate::Result<Vec<Card>> {
        let names = names.iter().map(String::as_str).collect::<AHashSet<_>>();

        Ok(self
            .cards
            .iter()
            .filter(|card| names.contains(card.name.as_str()))
            .cloned()
            .collect())
    }

    async fn list_cards(&self) -> crate::Result<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

#[async_trait::async_trait]
impl GroupDirectory for MemoryDirectory {
    async fn groups_of(&self, user: &Principal) -> crate::Result<Vec<String>> {
        Ok(self
            .names
            .get(&user.name)
            .map(|id| self.principals[*id as usize].member_of.clone())
            .unwrap_or_default())
    }

    async fn members_of(&self, group: &str) -> crate::Result<Vec<Principal>> {
        Ok(self
            .principals
            .iter()
            .filter(|principal| {
                principal.typ == Type::Individual
                    && principal.member_of.iter().any(|name| name == group)
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl ConfigStore for MemoryDirectory {
    async fn app_value(&self, app: &str, key: &str, default: &str) -> crate::Result<String> {
        Ok(self
            .settings
            .get(&format!("{app}.{key}"))
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }
}
