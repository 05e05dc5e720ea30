use serde::Serialize;
use std::path::PathBuf;

/// The pseudo-package holding Go's predeclared identifiers (`error`,
/// `any`, ...). Its interfaces are referenced bare, without a package
/// qualifier, and are exempt from the exported-name check.
pub const BUILTIN_PACKAGE: &str = "builtin";

/// One discovered interface declaration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// Declaring package identifier; empty if undetectable.
    pub package_name: String,
    /// File the declaration was found in.
    pub source_path: PathBuf,
    /// Bare interface identifier.
    pub interface_name: String,
    /// `package.Name`, or bare `Name` for the builtin pseudo-package.
    pub full_name: String,
    /// Found under a standard-library root rather than a project root.
    pub stdlib: bool,
    /// Module-rooted import path for project-local entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_path: Option<String>,
}

impl InterfaceEntry {
    /// Build an entry; `full_name` is derived, never stored independently.
    pub fn new(
        package_name: impl Into<String>,
        interface_name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        stdlib: bool,
        import_path: Option<String>,
    ) -> Self {
        let package_name = package_name.into();
        let interface_name = interface_name.into();
        let full_name = if package_name == BUILTIN_PACKAGE {
            interface_name.clone()
        } else {
            format!("{package_name}.{interface_name}")
        };
        Self {
            package_name,
            source_path: source_path.into(),
            interface_name,
            full_name,
            stdlib,
            import_path,
        }
    }
}

/// Two-partition interface store: project-local entries and
/// standard-library entries, kept separate because their lifecycles
/// differ. The project partition is rebuilt on every stub-generation
/// action; the stdlib partition survives until the toolchain root is
/// rediscovered.
#[derive(Debug, Default)]
pub struct Catalog {
    project: Vec<InterfaceEntry>,
    stdlib: Vec<InterfaceEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the project-local partition only.
    pub fn reset(&mut self) {
        self.project.clear();
    }

    /// Empty both partitions.
    pub fn clear(&mut self) {
        self.project.clear();
        self.stdlib.clear();
    }

    /// Add an entry to the partition selected by `entry.stdlib`.
    pub fn append(&mut self, entry: InterfaceEntry) {
        if entry.stdlib {
            self.stdlib.push(entry);
        } else {
            self.project.push(entry);
        }
    }

    /// All entries: project-local first, then standard-library, in
    /// insertion order within each partition.
    pub fn list(&self) -> impl Iterator<Item = &InterfaceEntry> {
        self.project.iter().chain(self.stdlib.iter())
    }

    /// First entry in `list()` order whose bare name equals `name`, so a
    /// project-local `Reader` shadows `io.Reader`.
    pub fn find_by_name(&self, name: &str) -> Option<&InterfaceEntry> {
        self.list().find(|entry| entry.interface_name == name)
    }

    pub fn len(&self) -> usize {
        self.project.len() + self.stdlib.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_empty() && self.stdlib.is_empty()
    }

    pub fn project_len(&self) -> usize {
        self.project.len()
    }

    pub fn stdlib_len(&self) -> usize {
        self.stdlib.len()
    }
}
