//! Integration test: full export/import cycle through the public API

use std::fs::{self, File};
use std::io::Write;

use projpack::{export_project, import_project, ContentKind, EntryKind};
use tempfile::tempdir;

#[test]
fn export_then_import_reproduces_the_tree() {
    let source = tempdir().unwrap();
    let restore = tempdir().unwrap();

    fs::create_dir_all(source.path().join("src/util")).unwrap();
    let mut lib = File::create(source.path().join("src/lib.rs")).unwrap();
    writeln!(lib, "pub fn answer() -> u32 {{ 42 }}").unwrap();
    let mut helper = File::create(source.path().join("src/util/helper.rs")).unwrap();
    writeln!(helper, "// helper").unwrap();
    let mut icon = File::create(source.path().join("icon.dat")).unwrap();
    icon.write_all(&[0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF]).unwrap();

    // Something the default ignores must drop
    fs::create_dir(source.path().join("node_modules")).unwrap();
    File::create(source.path().join("node_modules/pkg.js")).unwrap();

    let document = export_project(source.path(), false).unwrap();

    assert!(document
        .structure
        .iter()
        .all(|e| !e.path.starts_with("node_modules")));
    assert_eq!(document.files["icon.dat"].kind, ContentKind::Binary);
    assert_eq!(
        document
            .structure
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .count(),
        2
    );

    let json = serde_json::to_string_pretty(&document).unwrap();
    let summary = import_project(&json, restore.path(), false).unwrap();

    assert_eq!(summary.created_files, 3);
    assert_eq!(summary.created_directories, 2);
    assert!(summary.errors.is_empty());

    assert_eq!(
        fs::read_to_string(restore.path().join("src/lib.rs")).unwrap(),
        "pub fn answer() -> u32 { 42 }\n"
    );
    assert_eq!(
        fs::read(restore.path().join("icon.dat")).unwrap(),
        vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF]
    );
}
