use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_tscore_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_gz(path: &std::path::Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_load_plain_table() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    fs::write(&path, "score\tcount\n60\t2\n80\t3\n").unwrap();

    let bundle = load_input(Some(path.as_path()), &[]).unwrap();
    assert_eq!(bundle.rows.len(), 3);
    assert_eq!(bundle.rows[1], RawRow::new("60", "2"));
    assert_eq!(bundle.source, path.display().to_string());
}

#[test]
fn test_load_gz_table() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv.gz");
    write_gz(&path, "60\t2\n80\t3\n100\t1\n");

    let bundle = load_input(Some(path.as_path()), &[]).unwrap();
    assert_eq!(
        bundle.rows,
        vec![
            RawRow::new("60", "2"),
            RawRow::new("80", "3"),
            RawRow::new("100", "1"),
        ]
    );
}

#[test]
fn test_inline_rows_follow_file_rows() {
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    fs::write(&path, "60,2\n").unwrap();

    let bundle = load_input(Some(path.as_path()), &["90:1".to_string()]).unwrap();
    assert_eq!(
        bundle.rows,
        vec![RawRow::new("60", "2"), RawRow::new("90", "1")]
    );
    assert!(bundle.source.ends_with("+inline"));
}

#[test]
fn test_missing_input() {
    assert!(matches!(
        load_input(None, &[]),
        Err(InputError::MissingInput(_))
    ));
    let dir = make_temp_dir();
    assert!(matches!(
        load_input(Some(dir.join("absent.tsv").as_path()), &[]),
        Err(InputError::MissingInput(_))
    ));
}
