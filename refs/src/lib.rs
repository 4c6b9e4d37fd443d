/*
 * Copyright 2020 Nikhil Marathe <nsm.nikhil@gmail.com>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use icu_buildtool_tags::{Kind, Reference};
use std::collections::{hash_map::Entry, HashMap};

/// Dense index for a reference held by a [`ReferenceCache`].
pub type RefId = usize;

// Tells the caller whether an insert saw this reference for the first time. Graph builders use
// that to decide whether a node needs setting up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    AlreadyExists(RefId),
    Inserted(RefId),
}

impl InsertResult {
    pub fn id(self) -> RefId {
        match self {
            InsertResult::AlreadyExists(r) => r,
            InsertResult::Inserted(r) => r,
        }
    }
}

/// Interns build references so the rest of the build can pass around `RefId`s instead of strings.
///
/// Two references get the same id only if both the kind and the value match; `InFile("x")` and
/// `OutFile("x")` are separate nodes.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    nodes: Vec<Reference>,
    map: HashMap<Reference, RefId>,
}

impl ReferenceCache {
    pub fn new() -> ReferenceCache {
        ReferenceCache {
            nodes: vec![],
            map: HashMap::new(),
        }
    }

    pub fn insert<R: Into<Reference>>(&mut self, reference: R) -> InsertResult {
        // TODO: Avoid the clone when the entry is already occupied, needs raw_entry.
        let r = reference.into();
        let clone = r.clone();
        match self.map.entry(r) {
            Entry::Occupied(e) => InsertResult::AlreadyExists(*e.get()),
            Entry::Vacant(e) => {
                self.nodes.push(clone);
                let idx = self.nodes.len() - 1;
                e.insert(idx);
                InsertResult::Inserted(idx)
            }
        }
    }

    pub fn insert_and_get<R: Into<Reference>>(&mut self, reference: R) -> RefId {
        self.insert(reference).id()
    }

    pub fn get(&self, rf: RefId) -> Option<&Reference> {
        self.nodes.get(rf)
    }

    pub fn id_of(&self, reference: &Reference) -> Option<RefId> {
        self.map.get(reference).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All references in the order they were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = (RefId, &Reference)> {
        self.nodes.iter().enumerate()
    }

    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = (RefId, &Reference)> {
        self.iter().filter(move |(_, r)| r.kind() == kind)
    }
}
