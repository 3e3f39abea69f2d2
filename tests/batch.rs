mod common;

use std::fs;
use std::path::Path;

use common::ScelBuilder;
use scel_reader::scel::batch::{self, BatchEvent};
use scel_reader::{ParseEvent, ScelError, VocabularyItem};

fn dictionary(words: &[(&str, u16, u16)]) -> Vec<u8> {
    let mut builder = ScelBuilder::new().syllable(1, "wo").syllable(2, "ni");
    for &(word, index, frequency) in words {
        builder = builder.group(&[index], &[(word, Some(frequency))]);
    }
    builder.build()
}

fn populate(root: &Path) {
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("a.scel"), dictionary(&[("我", 1, 3), ("你", 2, 2)])).unwrap();
    fs::write(root.join("sub").join("b.SCEL"), dictionary(&[("我", 1, 9)])).unwrap();
    fs::write(root.join("broken.scel"), [0u8; 10]).unwrap();
    fs::write(root.join("notes.txt"), "not a dictionary").unwrap();
}

#[test]
fn discovery_is_recursive_sorted_and_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let files = batch::discover(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.scel", "broken.scel", "sub/b.SCEL"]);
}

#[test]
fn extension_check() {
    assert!(batch::has_scel_extension(Path::new("x.scel")));
    assert!(batch::has_scel_extension(Path::new("dir/x.ScEl")));
    assert!(!batch::has_scel_extension(Path::new("x.scel.txt")));
    assert!(!batch::has_scel_extension(Path::new("scel")));
}

#[test]
fn directory_conversion_merges_and_reports_failures() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path());

    let mut events: Vec<ParseEvent> = Vec::new();
    let mut seen = Vec::new();
    let report = batch::convert_directory(dir.path(), &mut events, |event| match event {
        BatchEvent::Converted { index, total, dictionary, .. } => {
            seen.push((index, total, Some(dictionary.items.len())))
        }
        BatchEvent::Failed { index, total, error, .. } => {
            assert!(error.is_format_error());
            seen.push((index, total, None))
        }
    })
    .unwrap();

    assert_eq!(seen, vec![(1, 3, Some(2)), (2, 3, None), (3, 3, Some(1))]);
    assert_eq!(report.files.len(), 3);
    assert_eq!(report.converted.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("broken.scel"));
    assert!(matches!(report.failures[0].1, ScelError::TooSmall { len: 10 }));

    assert_eq!(report.items_read, 3);
    assert_eq!(report.duplicates_removed(), 1);
    assert_eq!(
        report.items,
        vec![
            VocabularyItem::new("你", "ni", 2),
            VocabularyItem::new("我", "wo", 9),
        ]
    );
}

#[test]
fn empty_directory_yields_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = batch::convert_directory(dir.path(), &mut Vec::<ParseEvent>::new(), |_| {}).unwrap();
    assert!(report.files.is_empty());
    assert!(report.items.is_empty());
}

#[test]
fn file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.scel");
    fs::write(&file, dictionary(&[])).unwrap();

    match batch::discover(&file) {
        Err(ScelError::NotADirectory(path)) => assert_eq!(path, file),
        other => panic!("expected NotADirectory, got {:?}", other),
    }
}
