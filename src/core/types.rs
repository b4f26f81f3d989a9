use std::path::{Path, PathBuf};

/// Part a source file plays in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRole {
    /// `StoryTree.js`, whose braces drive the splice points.
    Container,
    Sdb,
    Character,
    ActionTree,
}

impl SourceRole {
    /// Roles in the order their files are opened.
    pub const ALL: [SourceRole; 4] = [
        SourceRole::Sdb,
        SourceRole::Character,
        SourceRole::ActionTree,
        SourceRole::Container,
    ];

    /// Fixed file name expected inside the input folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            SourceRole::Container => "StoryTree.js",
            SourceRole::Sdb => "SDB.js",
            SourceRole::Character => "Character.js",
            SourceRole::ActionTree => "STree.js",
        }
    }
}

impl std::fmt::Display for SourceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRole::Container => write!(f, "container"),
            SourceRole::Sdb => write!(f, "SDB"),
            SourceRole::Character => write!(f, "character"),
            SourceRole::ActionTree => write!(f, "action tree"),
        }
    }
}

/// A source file located inside the input folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub role: SourceRole,
    pub path: PathBuf,
}

impl SourceFile {
    pub fn locate(input_folder: &Path, role: SourceRole) -> SourceFile {
        SourceFile {
            role,
            path: input_folder.join(role.file_name()),
        }
    }
}

/// Full text of the three member files, injected in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members {
    pub sdb: String,
    pub character: String,
    pub action_tree: String,
}

impl Members {
    pub fn in_order(&self) -> [&str; 3] {
        [
            self.sdb.as_str(),
            self.character.as_str(),
            self.action_tree.as_str(),
        ]
    }
}

/// Everything read from the input folder before splicing starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleSources {
    pub container: String,
    pub members: Members,
}

/// Where the splice points landed in the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpliceOutcome {
    /// 1-based container line after which the members were injected.
    pub injected_after_line: Option<usize>,
    /// 1-based container line that was dropped as the first `};`.
    pub dropped_line: Option<usize>,
}

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub sources: Vec<SourceFile>,
    pub output_file: PathBuf,
    pub bytes_written: usize,
    pub outcome: SpliceOutcome,
}
