use std::{env, fs, process};

use bytes::Bytes;
use pqtree::{ByteSource, LocalFileSource, Location, MemorySource, SourceError};

#[test]
fn memory_source_serves_named_objects() {
    let source = MemorySource::new().with_object("a.parquet", b"abc".to_vec());
    source.insert("bucket/b.parquet", Bytes::from_static(b"xyz"));

    assert_eq!(source.scheme(), "mem");
    let a = source.fetch(&Location::parse("mem://a.parquet").unwrap()).unwrap();
    assert_eq!(a.as_ref(), b"abc");
    let b = source
        .fetch(&Location::parse("mem://bucket/b.parquet").unwrap())
        .unwrap();
    assert_eq!(b.as_ref(), b"xyz");
}

#[test]
fn memory_source_reports_missing_objects() {
    let source = MemorySource::new();
    let err = source
        .fetch(&Location::parse("mem://missing.parquet").unwrap())
        .unwrap_err();
    assert!(matches!(err, SourceError::NotFound { .. }));
}

#[test]
fn memory_source_clones_share_objects() {
    let source = MemorySource::new();
    let shared = source.clone();
    source.insert("late.parquet", b"1".to_vec());
    assert!(shared.fetch(&Location::parse("mem://late.parquet").unwrap()).is_ok());
}

#[test]
fn local_source_reads_files() {
    let path = env::temp_dir().join(format!("pqtree-source-{}.bin", process::id()));
    fs::write(&path, b"local bytes").unwrap();

    let location = Location::parse(path.to_str().unwrap()).unwrap();
    let data = LocalFileSource.fetch(&location).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(data.as_ref(), b"local bytes");
}

#[test]
fn local_source_reports_io_errors() {
    let location = Location::parse("/definitely/not/here.parquet").unwrap();
    let err = LocalFileSource.fetch(&location).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.parquet"));
}

#[cfg(unix)]
#[test]
fn local_source_reads_file_uris_with_spaces() {
    let path = env::temp_dir().join(format!("pqtree source {}.bin", process::id()));
    fs::write(&path, b"spaced").unwrap();

    let location = Location::parse(&format!("file://{}", path.display())).unwrap();
    let data = LocalFileSource.fetch(&location);
    fs::remove_file(&path).unwrap();

    assert_eq!(data.unwrap().as_ref(), b"spaced");
}
