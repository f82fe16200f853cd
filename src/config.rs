/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use crate::{ConfigStore, Result};

pub const APP_CORE: &str = "core";
pub const KEY_ENUMERATION: &str = "shareapi_allow_share_dialog_user_enumeration";
pub const KEY_ENUMERATION_GROUP: &str = "shareapi_restrict_user_enumeration_to_group";
pub const KEY_ENUMERATION_PHONE: &str = "shareapi_restrict_user_enumeration_to_phone";

/// Share-enumeration policy flags, stored as `"yes"`/`"no"` strings in
/// the dynamic configuration. The flags are independent, any combination
/// is legal and they are read fresh on every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationPolicy {
    pub enabled: bool,
    pub restrict_to_group: bool,
    pub restrict_to_phone: bool,
}

impl EnumerationPolicy {
    pub async fn load(store: &dyn ConfigStore) -> Result<Self> {
        Ok(EnumerationPolicy {
            enabled: is_yes(&store.app_value(APP_CORE, KEY_ENUMERATION, "yes").await?),
            restrict_to_group: is_yes(
                &store
                    .app_value(APP_CORE, KEY_ENUMERATION_GROUP, "no")
                    .await?,
            ),
            restrict_to_phone: is_yes(
                &store
                    .app_value(APP_CORE, KEY_ENUMERATION_PHONE, "no")
                    .await?,
            ),
        })
    }
}

fn is_yes(value: &str) -> bool {
    value == "yes"
}

#[cfg(test)]
mod tests {
    use crate::backend::memory::MemoryDirectory;

    use super::EnumerationPolicy;

    #[tokio::test]
    async fn policy_defaults() {
        let store = MemoryDirectory::from_config("").unwrap();

        assert_eq!(
            EnumerationPolicy::load(store.as_ref()).await.unwrap(),
            EnumerationPolicy {
                enabled: true,
                restrict_to_group: false,
                restrict_to_phone: false,
            }
        );
    }

    #[tokio::test]
    async fn policy_decoding() {
        const SETTINGS: &str = r#"
        [settings]
        "core.shareapi_allow_share_dialog_user_enumeration" = "no"
        "core.shareapi_restrict_user_enumeration_to_group" = "yes"
        "core.shareapi_restrict_user_enumeration_to_phone" = "true"
        "#;

        let store = MemoryDirectory::from_config(SETTINGS).unwrap();

        // Anything other than "yes" decodes to false, including "true".
        assert_eq!(
            EnumerationPolicy::load(store.as_ref()).await.unwrap(),
            EnumerationPolicy {
                enabled: false,
                restrict_to_group: true,
                restrict_to_phone: false,
            }
        );
    }
}
