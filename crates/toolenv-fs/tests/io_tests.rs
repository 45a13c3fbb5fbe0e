use std::fs;
use std::io::ErrorKind;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use toolenv_fs::{Error, io};

#[test]
fn test_read_lines_strips_lf() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lines.txt");
    fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let lines: Vec<String> = io::read_lines(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["one", "two", "three"]);
}

#[test]
fn test_read_lines_strips_crlf() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lines.txt");
    fs::write(&path, "one 1\r\ntwo 2\r\n").unwrap();

    let lines: Vec<String> = io::read_lines(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["one 1", "two 2"]);
    assert!(lines.iter().all(|l| !l.contains('\r')));
}

#[test]
fn test_read_lines_keeps_blank_lines() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lines.txt");
    fs::write(&path, "a\n\nb").unwrap();

    let lines: Vec<String> = io::read_lines(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["a", "", "b"]);
}

#[test]
fn test_read_lines_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert_eq!(io::read_lines(&path).unwrap().count(), 0);
}

#[test]
fn test_read_lines_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.txt");

    let err = io::read_lines(&path).unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_read_lines_invalid_utf8_is_error_mid_stream() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.txt");
    fs::write(&path, b"good 1\n\xff\xfe 2\n").unwrap();

    let mut lines = io::read_lines(&path).unwrap();
    assert_eq!(lines.next().unwrap().unwrap(), "good 1");
    let err = lines.next().unwrap().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.io_kind(), Some(ErrorKind::InvalidData));
}

#[test]
fn test_append_text_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env");

    io::append_text(&path, "A=1\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\n");
}

#[test]
fn test_append_text_preserves_existing_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("env");
    fs::write(&path, "A=1\n").unwrap();

    io::append_text(&path, "B=2\n").unwrap();
    io::append_text(&path, "C=3\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\nB=2\nC=3\n");
}

#[test]
fn test_append_text_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no").join("such").join("env");

    let result = io::append_text(&path, "A=1\n");
    assert!(matches!(result, Err(Error::Io { .. })));
}
