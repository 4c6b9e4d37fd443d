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

//! Typed tags for the names an ICU data build description refers to.
//!
//! Every file path and tool name in the description is wrapped in the tag that says what kind of
//! thing it is, so later stages can match on the type instead of on naming conventions. Tags are
//! plain immutable values: equal contents mean equal tags, and they can be used as set members or
//! map keys.
//!
//! ```
//! use icu_buildtool_tags::{InFile, OutFile, Reference};
//!
//! let input = InFile::new("coll/root.txt");
//! assert_eq!(input.filename(), "coll/root.txt");
//!
//! // Same string, different kind.
//! assert_ne!(Reference::from(input), Reference::from(OutFile::new("coll/root.txt")));
//! ```

// Declares a single field tag. The field is private and only exposed through a `&str` accessor so
// the value can't change once built.
macro_rules! tag {
    ($(#[$meta:meta])* $tag:ident { $field:ident, $into:ident }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $tag {
            $field: String,
        }

        impl $tag {
            pub fn new<S: Into<String>>($field: S) -> $tag {
                $tag {
                    $field: $field.into(),
                }
            }

            pub fn $field(&self) -> &str {
                &self.$field
            }

            pub fn $into(self) -> String {
                self.$field
            }
        }

        impl From<String> for $tag {
            fn from(value: String) -> Self {
                $tag::new(value)
            }
        }

        impl From<&str> for $tag {
            fn from(value: &str) -> Self {
                $tag::new(value)
            }
        }

        impl AsRef<str> for $tag {
            fn as_ref(&self) -> &str {
                &self.$field
            }
        }

        impl ::std::fmt::Display for $tag {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.$field)
            }
        }
    };
}

mod file;
mod reference;
mod target;
mod tool;

pub use file::{InFile, OutFile, PkgFile, TmpFile};
pub use reference::{Kind, Reference, UnknownKind};
pub use target::DepTarget;
pub use tool::{IcuTool, SystemTool};
