use codecopy_core::{Mode, PatternSet, RunParameters, build_document, walk};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn setup_blacklist_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "src/file1.py", "print('Hello from file1')\n");
    write_file(dir.path(), "src/file2.txt", "This is file2.\n");
    write_file(dir.path(), "docs/doc1.md", "# Documentation\n");
    write_file(dir.path(), "ignore_me/secret.txt", "This should be ignored.\n");
    write_file(dir.path(), ".copyignore", "ignore_me/\n*.txt\n");
    dir
}

fn setup_whitelist_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "include_me/file_a.py", "print('Hello from file_a')\n");
    write_file(dir.path(), "include_me/file_b.txt", "This is file_b.\n");
    write_file(dir.path(), "other_dir/file_c.md", "## Another file\n");
    write_file(dir.path(), "another_dir/file_d.py", "print('Hello from file_d')\n");
    write_file(dir.path(), ".copyinclude", "include_me/\n*.py\n");
    dir
}

fn file_section(root: &Path, relative: &str) -> String {
    format!("==== File: {} ====", root.join(relative).display())
}

/// Exact structure-listing lines after the trailing marker. Exact comparison
/// matters: `another_dir/` must not satisfy a substring check for `other_dir/`.
fn structure_lines(doc: &str) -> Vec<&str> {
    doc.split("==== Directory Structure ====")
        .nth(1)
        .expect("document must contain a structure section")
        .lines()
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn blacklist_run_combines_expected_files() {
    let project = setup_blacklist_project();
    let root = project.path();

    let patterns = PatternSet::load(&root.join(Mode::Blacklist.pattern_file_name())).unwrap();
    let entries = walk(root, &patterns, Mode::Blacklist).unwrap();
    let params = RunParameters {
        root: root.to_path_buf(),
        mode: Mode::Blacklist,
        apply_filter_to_structure: true,
    };
    let doc = build_document(&params, &patterns, &entries);

    assert!(doc.contains(&file_section(root, "src/file1.py")));
    assert!(doc.contains(&file_section(root, "docs/doc1.md")));
    assert!(!doc.contains(&file_section(root, "src/file2.txt")));
    assert!(!doc.contains(&file_section(root, "ignore_me/secret.txt")));
    assert!(doc.contains("print('Hello from file1')"));

    // The pattern file contents are echoed verbatim.
    assert!(doc.contains("==== .copyignore Contents ====\nignore_me/\n*.txt\n"));

    // Structure listing reflects the filter.
    let lines = structure_lines(&doc);
    assert!(lines.contains(&"src/"));
    assert!(lines.contains(&"docs/"));
    assert!(!lines.contains(&"ignore_me/"));
    assert!(lines.contains(&"    file1.py"));
    assert!(lines.contains(&"    doc1.md"));
    assert!(!lines.contains(&"    file2.txt"));
}

#[test]
fn whitelist_run_combines_expected_files() {
    let project = setup_whitelist_project();
    let root = project.path();

    let patterns = PatternSet::load(&root.join(Mode::Whitelist.pattern_file_name())).unwrap();
    let entries = walk(root, &patterns, Mode::Whitelist).unwrap();
    let params = RunParameters {
        root: root.to_path_buf(),
        mode: Mode::Whitelist,
        apply_filter_to_structure: true,
    };
    let doc = build_document(&params, &patterns, &entries);

    assert!(doc.contains(&file_section(root, "include_me/file_a.py")));
    assert!(doc.contains(&file_section(root, "another_dir/file_d.py")));
    assert!(!doc.contains(&file_section(root, "include_me/file_b.txt")));
    assert!(!doc.contains(&file_section(root, "other_dir/file_c.md")));

    let lines = structure_lines(&doc);
    assert!(lines.contains(&"include_me/"));
    // Present because it holds an included file, even though no directory
    // pattern names it.
    assert!(lines.contains(&"another_dir/"));
    assert!(!lines.contains(&"other_dir/"));
    assert!(lines.contains(&"    file_a.py"));
    assert!(lines.contains(&"    file_d.py"));
    assert!(!lines.contains(&"    file_b.txt"));
    assert!(!lines.contains(&"    file_c.md"));
}

#[test]
fn non_utf8_file_is_skipped_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_file(root, "good.py", "print('ok')\n");
    fs::write(root.join("binary.dat"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let patterns = PatternSet::default();
    let entries = walk(root, &patterns, Mode::Blacklist).unwrap();
    let params = RunParameters {
        root: root.to_path_buf(),
        mode: Mode::Blacklist,
        apply_filter_to_structure: false,
    };
    let doc = build_document(&params, &patterns, &entries);

    assert!(doc.contains(&file_section(root, "good.py")));
    assert!(!doc.contains(&file_section(root, "binary.dat")));
    // The unreadable file still shows up in the unfiltered structure listing.
    let lines = structure_lines(&doc);
    assert!(lines.contains(&"    binary.dat"));
}

#[test]
fn empty_pattern_set_defaults_follow_the_mode() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_file(root, "a.rs", "fn main() {}\n");

    let patterns = PatternSet::default();

    let blacklist = walk(root, &patterns, Mode::Blacklist).unwrap();
    assert!(
        blacklist
            .iter()
            .filter(|w| !w.entry.is_dir)
            .all(|w| w.decision.included)
    );

    let whitelist = walk(root, &patterns, Mode::Whitelist).unwrap();
    assert!(
        whitelist
            .iter()
            .filter(|w| !w.entry.is_dir)
            .all(|w| !w.decision.included)
    );
}
