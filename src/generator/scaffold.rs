//! CVCore Swift package scaffolding.
//!
//! Lays down the empty source/test folder tree and three placeholder files.
//! Existing directories are kept; existing files are overwritten.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{ensure_dir, write_file};

/// Name of the scaffolded Swift library.
pub const PACKAGE_NAME: &str = "CVCore";

/// Folders created under the base directory, in creation order.
pub const FOLDERS: &[&str] = &[
    "Sources/CVCore/Networking",
    "Sources/CVCore/Persistence",
    "Sources/CVCore/Services",
    "Tests/CVCoreTests/Networking",
    "Tests/CVCoreTests/Persistence",
    "Tests/CVCoreTests/Services",
];

const CVCORE_SWIFT: &str = "// Entry point for the CVCore package\n\npublic struct CVCore {}";

const CVCORE_TESTS_SWIFT: &str = "// Entry point for CVCore tests\n\nimport XCTest\n@testable import CVCore\n\nfinal class CVCoreTests: XCTestCase {}";

const PACKAGE_SWIFT: &str = r#"// swift-tools-version:5.7
import PackageDescription

let package = Package(
    name: "CVCore",
    platforms: [
        .iOS(.v14)
    ],
    products: [
        .library(
            name: "CVCore",
            targets: ["CVCore"]),
    ],
    targets: [
        .target(
            name: "CVCore",
            dependencies: []),
        .testTarget(
            name: "CVCoreTests",
            dependencies: ["CVCore"]),
    ]
)
"#;

/// Files written under the base directory as (relative path, content).
pub const FILES: &[(&str, &str)] = &[
    ("Sources/CVCore/CVCore.swift", CVCORE_SWIFT),
    ("Tests/CVCoreTests/CVCoreTests.swift", CVCORE_TESTS_SWIFT),
    ("Package.swift", PACKAGE_SWIFT),
];

/// What a scaffold run touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Base directory the tree was created under.
    pub base_dir: PathBuf,
    /// Directories ensured, in order.
    pub directories: Vec<PathBuf>,
    /// Files written, in order.
    pub files: Vec<PathBuf>,
}

/// Creates the CVCore package skeleton under `base_dir`.
///
/// All folders are created before any file is written. The first failure
/// aborts the run and leaves whatever was already created in place.
///
/// # Errors
///
/// Returns an error if a directory cannot be created (permissions, a regular
/// file in the way) or a file cannot be written.
pub fn generate_scaffold(base_dir: &Path) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport {
        base_dir: base_dir.to_path_buf(),
        ..ScaffoldReport::default()
    };

    for folder in FOLDERS {
        let dir = base_dir.join(folder);
        ensure_dir(&dir)?;
        report.directories.push(dir);
    }

    for (relative, content) in FILES {
        let path = base_dir.join(relative);
        // Package.swift sits directly in base_dir, which no folder entry covers
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        write_file(&path, content)?;
        report.files.push(path);
    }

    info!(
        base_dir = %base_dir.display(),
        directories = report.directories.len(),
        files = report.files.len(),
        "scaffolded {} package",
        PACKAGE_NAME
    );

    Ok(report)
}
