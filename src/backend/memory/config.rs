/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use std::{collections::HashMap, sync::Arc};

use serde::Deserialize;

use crate::{book::card_uri, Card, DirectoryError, Principal, Result, Type};

use super::MemoryDirectory;

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct MemoryConfig {
    #[serde(default)]
    users: Vec<UserConfig>,
    #[serde(default)]
    cards: Vec<CardConfig>,
    #[serde(default)]
    settings: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UserConfig {
    name: String,
    #[serde(default = "default_backend")]
    backend: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "member-of")]
    member_of: Vec<String>,
    #[serde(default = "default_card")]
    card: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CardConfig {
    name: String,
    #[serde(default)]
    data: String,
}

fn default_backend() -> String {
    "Database".to_string()
}

fn default_card() -> bool {
    true
}

impl MemoryDirectory {
    /// Builds the directory from its TOML representation. Each user gets
    /// a synthesized contact card under its canonical name unless the
    /// entry sets `card = false`; additional cards may be declared
    /// verbatim under `[[cards]]`.
    pub fn from_config(config: &str) -> Result<Arc<MemoryDirectory>> {
        let config: MemoryConfig =
            toml::from_str(config).map_err(|err| DirectoryError::config(err.to_string()))?;
        let mut directory = MemoryDirectory::default();

        for user in config.users {
            let id = directory.principals.len() as u32;
            let principal = Principal {
                name: user.name,
                backend: user.backend,
                typ: Type::Individual,
                description: user.description,
                member_of: user.member_of,
            };
            directory.names.insert(principal.name.clone(), id);
            if user.card {
                directory.cards.push(Card {
                    name: card_uri(&principal),
                    data: vcard_stub(&principal),
                });
            }
            directory.principals.push(principal);
        }

        for card in config.cards {
            directory.cards.push(Card {
                name: card.name,
                data: card.data,
            });
        }

        directory.settings.extend(config.settings);

        Ok(Arc::new(directory))
    }
}

fn vcard_stub(user: &Principal) -> String {
    format!(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nUID:{}\r\nFN:{}\r\nEND:VCARD\r\n",
        user.name,
        user.description.as_deref().unwrap_or(&user.name)
    )
}
