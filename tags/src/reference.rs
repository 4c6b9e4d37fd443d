use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::{DepTarget, IcuTool, InFile, OutFile, PkgFile, SystemTool, TmpFile};

/// Which tag a [`Reference`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    InFile,
    TmpFile,
    OutFile,
    PkgFile,
    IcuTool,
    SystemTool,
    DepTarget,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::InFile,
        Kind::TmpFile,
        Kind::OutFile,
        Kind::PkgFile,
        Kind::IcuTool,
        Kind::SystemTool,
        Kind::DepTarget,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::InFile => "InFile",
            Kind::TmpFile => "TmpFile",
            Kind::OutFile => "OutFile",
            Kind::PkgFile => "PkgFile",
            Kind::IcuTool => "IcuTool",
            Kind::SystemTool => "SystemTool",
            Kind::DepTarget => "DepTarget",
        }
    }

    /// Name of the single field the tag type exposes.
    pub fn field_name(self) -> &'static str {
        if self.is_file() {
            "filename"
        } else {
            "name"
        }
    }

    pub fn is_file(self) -> bool {
        matches!(
            self,
            Kind::InFile | Kind::TmpFile | Kind::OutFile | Kind::PkgFile
        )
    }

    pub fn is_tool(self) -> bool {
        matches!(self, Kind::IcuTool | Kind::SystemTool)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag kind: {0:?}")]
pub struct UnknownKind(String);

impl UnknownKind {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    // Exact type names only, the same spelling the build description uses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}

/// Any one of the tags, for places that hold a mix of files and tools.
///
/// Equality takes the variant into account, so an input and an output with the same filename are
/// different references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reference {
    InFile(InFile),
    TmpFile(TmpFile),
    OutFile(OutFile),
    PkgFile(PkgFile),
    IcuTool(IcuTool),
    SystemTool(SystemTool),
    DepTarget(DepTarget),
}

impl Reference {
    pub fn new<S: Into<String>>(kind: Kind, value: S) -> Reference {
        match kind {
            Kind::InFile => Reference::InFile(InFile::new(value)),
            Kind::TmpFile => Reference::TmpFile(TmpFile::new(value)),
            Kind::OutFile => Reference::OutFile(OutFile::new(value)),
            Kind::PkgFile => Reference::PkgFile(PkgFile::new(value)),
            Kind::IcuTool => Reference::IcuTool(IcuTool::new(value)),
            Kind::SystemTool => Reference::SystemTool(SystemTool::new(value)),
            Kind::DepTarget => Reference::DepTarget(DepTarget::new(value)),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Reference::InFile(_) => Kind::InFile,
            Reference::TmpFile(_) => Kind::TmpFile,
            Reference::OutFile(_) => Kind::OutFile,
            Reference::PkgFile(_) => Kind::PkgFile,
            Reference::IcuTool(_) => Kind::IcuTool,
            Reference::SystemTool(_) => Kind::SystemTool,
            Reference::DepTarget(_) => Kind::DepTarget,
        }
    }

    /// The filename or name, whichever the variant holds.
    pub fn value(&self) -> &str {
        match self {
            Reference::InFile(f) => f.filename(),
            Reference::TmpFile(f) => f.filename(),
            Reference::OutFile(f) => f.filename(),
            Reference::PkgFile(f) => f.filename(),
            Reference::IcuTool(t) => t.name(),
            Reference::SystemTool(t) => t.name(),
            Reference::DepTarget(t) => t.name(),
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Reference::InFile(f) => f.into_filename(),
            Reference::TmpFile(f) => f.into_filename(),
            Reference::OutFile(f) => f.into_filename(),
            Reference::PkgFile(f) => f.into_filename(),
            Reference::IcuTool(t) => t.into_name(),
            Reference::SystemTool(t) => t.into_name(),
            Reference::DepTarget(t) => t.into_name(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind().is_file()
    }

    pub fn is_tool(&self) -> bool {
        self.kind().is_tool()
    }

    pub fn is_dep_target(&self) -> bool {
        matches!(self, Reference::DepTarget(_))
    }

    pub fn as_in_file(&self) -> Option<&InFile> {
        match *self {
            Reference::InFile(ref f) => Some(f),
            _ => None,
        }
    }

    pub fn as_tmp_file(&self) -> Option<&TmpFile> {
        match *self {
            Reference::TmpFile(ref f) => Some(f),
            _ => None,
        }
    }

    pub fn as_out_file(&self) -> Option<&OutFile> {
        match *self {
            Reference::OutFile(ref f) => Some(f),
            _ => None,
        }
    }

    pub fn as_pkg_file(&self) -> Option<&PkgFile> {
        match *self {
            Reference::PkgFile(ref f) => Some(f),
            _ => None,
        }
    }

    pub fn as_icu_tool(&self) -> Option<&IcuTool> {
        match *self {
            Reference::IcuTool(ref t) => Some(t),
            _ => None,
        }
    }

    pub fn as_system_tool(&self) -> Option<&SystemTool> {
        match *self {
            Reference::SystemTool(ref t) => Some(t),
            _ => None,
        }
    }

    pub fn as_dep_target(&self) -> Option<&DepTarget> {
        match *self {
            Reference::DepTarget(ref t) => Some(t),
            _ => None,
        }
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.value())
    }
}

macro_rules! reference_from {
    ($($tag:ident),*) => {
        $(
            impl From<$tag> for Reference {
                fn from(tag: $tag) -> Self {
                    Reference::$tag(tag)
                }
            }
        )*
    };
}

reference_from!(InFile, TmpFile, OutFile, PkgFile, IcuTool, SystemTool, DepTarget);
