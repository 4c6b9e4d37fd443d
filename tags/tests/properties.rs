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

use icu_buildtool_tags::{
    DepTarget, IcuTool, InFile, Kind, OutFile, PkgFile, Reference, SystemTool, TmpFile,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::InFile),
        Just(Kind::TmpFile),
        Just(Kind::OutFile),
        Just(Kind::PkgFile),
        Just(Kind::IcuTool),
        Just(Kind::SystemTool),
        Just(Kind::DepTarget),
    ]
}

// Two different kinds.
fn kind_pair_strategy() -> impl Strategy<Value = (Kind, Kind)> {
    (kind_strategy(), kind_strategy()).prop_filter("kinds must differ", |(a, b)| a != b)
}

proptest! {
    #[test]
    fn field_round_trips(s in any::<String>()) {
        let files = (
            InFile::new(s.clone()),
            TmpFile::new(s.clone()),
            OutFile::new(s.clone()),
            PkgFile::new(s.clone()),
        );
        prop_assert_eq!(files.0.filename(), s.as_str());
        prop_assert_eq!(files.1.filename(), s.as_str());
        prop_assert_eq!(files.2.filename(), s.as_str());
        prop_assert_eq!(files.3.filename(), s.as_str());

        let tools = (IcuTool::new(s.clone()), SystemTool::new(s.clone()), DepTarget::new(s.clone()));
        prop_assert_eq!(tools.0.name(), s.as_str());
        prop_assert_eq!(tools.1.name(), s.as_str());
        prop_assert_eq!(tools.2.name(), s.as_str());
    }

    #[test]
    fn reference_round_trips(kind in kind_strategy(), s in any::<String>()) {
        let reference = Reference::new(kind, s.clone());
        prop_assert_eq!(reference.kind(), kind);
        prop_assert_eq!(reference.value(), s.as_str());
        prop_assert_eq!(reference.into_value(), s);
    }

    #[test]
    fn different_values_differ(kind in kind_strategy(), a in any::<String>(), b in any::<String>()) {
        prop_assume!(a != b);
        prop_assert_ne!(Reference::new(kind, a.clone()), Reference::new(kind, b.clone()));
        prop_assert_ne!(InFile::new(a.clone()), InFile::new(b.clone()));
        prop_assert_ne!(IcuTool::new(a), IcuTool::new(b));
    }

    #[test]
    fn different_kinds_differ((k1, k2) in kind_pair_strategy(), s in any::<String>()) {
        prop_assert_ne!(Reference::new(k1, s.clone()), Reference::new(k2, s));
    }

    #[test]
    fn double_insert_keeps_one(kind in kind_strategy(), s in any::<String>()) {
        let mut set = HashSet::new();
        set.insert(Reference::new(kind, s.clone()));
        set.insert(Reference::new(kind, s));
        prop_assert_eq!(set.len(), 1);
    }

    #[test]
    fn kind_parses_own_name(kind in kind_strategy()) {
        prop_assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
    }
}

#[test]
fn equal_inputs() {
    assert_eq!(InFile::new("foo.txt"), InFile::new("foo.txt"));
}

#[test]
fn input_is_not_output() {
    assert_ne!(
        Reference::from(InFile::new("foo.txt")),
        Reference::from(OutFile::new("foo.txt"))
    );
}

#[test]
fn icu_tool_name() {
    assert_eq!(IcuTool::new("genrb").name(), "genrb");
}

#[test]
fn dep_target_set() {
    let set: HashSet<DepTarget> = vec![DepTarget::new("pkgA"), DepTarget::new("pkgA")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn tags_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Reference>();
    assert_send_sync::<InFile>();
    assert_send_sync::<SystemTool>();
}
