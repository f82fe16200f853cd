/*
 * SPDX-FileCopyrightText: 2020 Stalwart Labs Ltd <hello@stalw.art>
 *
 * SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-SEL
 */

use ahash::AHashMap;

use crate::{Card, Principal};

pub mod config;
pub mod lookup;

/// In-memory directory holding user principals, their contact cards and
/// the dynamic application settings. Implements all three collaborator
/// traits consumed by the system address book.
#[derive(Default)]
pub struct MemoryDirectory {
    principals: Vec<Principal>,
    names: AHashMap<String, u32>,
    cards: Vec<Card>,
    settings: AHashMap<String, String>,
}
