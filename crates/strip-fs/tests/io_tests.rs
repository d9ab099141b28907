use pretty_assertions::assert_eq;
use std::fs;
use strip_fs::{Error, Sink, Source, read_source, write_atomic, write_sink};
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");

    write_atomic(&path, b"hello world").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");
    fs::write(&path, "original").unwrap();

    write_atomic(&path, b"updated").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
}

#[test]
fn test_write_atomic_creates_parent_dirs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/out.txt");

    write_atomic(&path, b"deep").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "deep");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    write_atomic(&temp.path().join("out.txt"), b"x").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_read_source_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("in.txt");
    fs::write(&path, "<SAMPLE>x<SOURCE>").unwrap();

    let text = read_source(&Source::File(path)).unwrap();
    assert_eq!(text, "<SAMPLE>x<SOURCE>");
}

#[test]
fn test_read_source_drops_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("in.txt");
    fs::write(&path, b"A \xff<SAMPLE>\xfex<SOURCE>").unwrap();

    let text = read_source(&Source::File(path)).unwrap();
    assert_eq!(text, "A <SAMPLE>x<SOURCE>");
}

#[test]
fn test_read_source_missing_file() {
    let result = read_source(&Source::File("/nonexistent/in.txt".into()));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_write_sink_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.txt");

    write_sink(&Sink::File(path.clone()), "A  B  C").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "A  B  C");
}
