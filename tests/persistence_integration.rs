//! Integration tests for list persistence.
//!
//! These tests write and read list files in temporary directories created
//! with tempfile.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use typedlist::core::error::ListError;
use typedlist::core::list::List;
use typedlist::core::persist::ListFile;
use typedlist::core::types::{Element, Kind, CAPACITY};
use typedlist::ui::output::Verbosity;

// =============================================================================
// Test Helpers
// =============================================================================

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn file(&self, name: &str) -> ListFile {
        ListFile::new(self.path(name)).with_verbosity(Verbosity::Quiet)
    }

    fn write_raw(&self, name: &str, contents: &str) -> ListFile {
        fs::write(self.path(name), contents).expect("write raw file");
        self.file(name)
    }
}

fn ints(values: &[i64]) -> List {
    let mut list = List::integers();
    for (i, v) in values.iter().enumerate() {
        list.add(i, *v).unwrap();
    }
    list
}

// =============================================================================
// Round trips
// =============================================================================

mod roundtrip {
    use super::*;

    #[test]
    fn integer_list_file_format() {
        let ws = Workspace::new();
        let file = ws.file("ints.txt");

        file.write(&ints(&[1, 2, 3])).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "1\n1\n2\n3\n");
        let reloaded = file.read().unwrap();
        assert_eq!(reloaded.kind(), Kind::Integer);
        assert_eq!(reloaded, ints(&[1, 2, 3]));
    }

    #[test]
    fn text_list_keeps_inner_spaces() {
        let ws = Workspace::new();
        let mut list = List::texts();
        list.add(0, "hello world").unwrap();
        list.add(1, "ünïcode").unwrap();

        let file = ws.file("text.txt");
        file.write(&list).unwrap();

        assert_eq!(file.read().unwrap(), list);
    }

    #[test]
    fn list_helpers() {
        let ws = Workspace::new();
        let path = ws.path("helpers.txt");

        let outcome = ints(&[9]).write_to_file(&path).unwrap();
        assert_eq!(outcome.path, path);
        assert!(!outcome.overwritten);

        let again = ints(&[8]).write_to_file(&path).unwrap();
        assert!(again.overwritten);
        assert_eq!(List::read_from_file(&path).unwrap(), ints(&[8]));
    }

    #[test]
    fn full_list_reloads() {
        let ws = Workspace::new();
        let values: Vec<i64> = (0..CAPACITY as i64).collect();
        let file = ws.file("full.txt");
        file.write(&ints(&values)).unwrap();
        assert_eq!(file.read().unwrap().len(), CAPACITY);
    }
}

// =============================================================================
// Failures
// =============================================================================

mod failures {
    use super::*;

    #[test]
    fn missing_file() {
        let ws = Workspace::new();
        assert!(matches!(
            ws.file("absent.txt").read(),
            Err(ListError::FileNotFound { .. })
        ));
    }

    #[test]
    fn bad_kind_tag() {
        let ws = Workspace::new();
        let file = ws.write_raw("bad.txt", "integer\n1\n");
        assert!(matches!(
            file.read(),
            Err(ListError::MalformedInput { line: Some(1), .. })
        ));
    }

    #[test]
    fn unspecified_not_reloadable() {
        let ws = Workspace::new();
        let file = ws.file("mixed.txt");

        let mut mixed = List::new();
        mixed.add(0, 1).unwrap();
        mixed.add(1, "a").unwrap();
        file.write(&mixed).unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "0\n1\na\n");
        assert!(matches!(file.read(), Err(ListError::InvalidType { .. })));
    }

    #[test]
    fn unparsable_integer_line() {
        let ws = Workspace::new();
        let file = ws.write_raw("bad.txt", "1\n10\n1.5\n");
        assert!(matches!(
            file.read(),
            Err(ListError::MalformedInput { line: Some(3), .. })
        ));
    }

    #[test]
    fn too_many_lines() {
        let ws = Workspace::new();
        let body: String = (0..CAPACITY + 1).map(|_| "x\n").collect();
        let file = ws.write_raw("long.txt", &format!("2\n{}", body));
        assert!(matches!(
            file.read(),
            Err(ListError::CapacityExceeded { capacity: 20 })
        ));
    }

    #[test]
    fn directory_path_is_io_error() {
        let ws = Workspace::new();
        let file = ListFile::new(ws.dir.path()).with_verbosity(Verbosity::Quiet);
        assert!(matches!(file.read(), Err(ListError::Io { .. })));
    }
}

// =============================================================================
// Derived lists
// =============================================================================

mod derived {
    use super::*;

    #[test]
    fn split_halves_persist_independently() {
        let ws = Workspace::new();
        let (first, second) = ints(&[1, 2, 3, 4]).split(2).unwrap();

        ws.file("first.txt").write(&first).unwrap();
        ws.file("second.txt").write(&second).unwrap();

        assert_eq!(ws.file("first.txt").read().unwrap(), ints(&[1, 2]));
        assert_eq!(ws.file("second.txt").read().unwrap(), ints(&[3, 4]));
    }

    #[test]
    fn truncated_merge_persists() {
        let ws = Workspace::new();
        let mut a = List::texts();
        let mut b = List::texts();
        for i in 0..11 {
            a.add(i, format!("a{}", i)).unwrap();
            b.add(i, format!("b{}", i)).unwrap();
        }

        let partial = a.merge(&b).unwrap_err().into_partial().unwrap();
        let file = ws.file("merged.txt");
        file.write(&partial).unwrap();

        let reloaded = file.read().unwrap();
        assert_eq!(reloaded.len(), CAPACITY);
        assert_eq!(reloaded.get(19), Some(&Element::from("b8")));
    }

    #[test]
    fn queue_changes_persist() {
        let ws = Workspace::new();
        let file = ws.file("queue.txt");
        file.write(&ints(&[1, 2, 3])).unwrap();

        let mut list = file.read().unwrap();
        assert_eq!(list.as_queue().dequeue().unwrap(), Element::from(1));
        file.write(&list).unwrap();

        assert_eq!(file.read().unwrap(), ints(&[2, 3]));
    }
}
