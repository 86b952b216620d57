//! Batch serialization format tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use clipway::batch::{serialize, BatchContext, FixedRemark, CLOSING_LINE, CLOSING_REMARKS};
use clipway::ClipError;

fn test_context() -> BatchContext {
    BatchContext {
        user: "talon".to_string(),
        host: "workbench".to_string(),
        cwd: "/home/talon/src".to_string(),
        timestamp: "05Oct2025PM161302".to_string(),
    }
}

fn write_files(dir: &TempDir) -> (PathBuf, PathBuf) {
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "hello").unwrap(); // 5 bytes
    fs::write(&b, "hi\n").unwrap(); // 3 bytes
    (a, b)
}

#[test]
fn two_files_produce_exact_structure() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_files(&dir);

    let buffer = serialize(&[a, b], &test_context(), &mut FixedRemark(0)).unwrap();
    let lines: Vec<&str> = buffer.lines().collect();

    assert_eq!(
        lines[0],
        "========BEGIN BATCH TRANSFER FROM talon@workbench:/home/talon/src AT 05Oct2025PM161302========"
    );

    // One header/content/footer triple per file, in input order.
    assert!(lines[1].starts_with("===========BEGIN A.TXT, MODIFIED "));
    assert_eq!(lines[2], "hello");
    assert_eq!(lines[3], "===========END A.TXT, TOTAL 5 BYTES===========");
    assert!(lines[4].starts_with("===========BEGIN B.TXT, MODIFIED "));
    assert_eq!(lines[5], "hi");

    // Byte totals come from stat, summed across the whole batch.
    assert!(buffer.contains("========END BATCH TRANSFER, TOTAL 2 FILES, 8 bytes========\n"));

    assert_eq!(lines[lines.len() - 2], CLOSING_REMARKS[0]);
    assert_eq!(lines[lines.len() - 1], CLOSING_LINE);
    assert!(buffer.ends_with('\n'));
}

#[test]
fn single_batch_header_and_footer() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_files(&dir);

    let buffer = serialize(&[a, b], &test_context(), &mut FixedRemark(3)).unwrap();
    assert_eq!(buffer.matches("BEGIN BATCH TRANSFER").count(), 1);
    assert_eq!(buffer.matches("END BATCH TRANSFER").count(), 1);
    assert_eq!(buffer.matches("===========BEGIN ").count(), 2);
    assert_eq!(buffer.matches("===========END ").count(), 2);
}

#[test]
fn input_order_is_preserved_not_sorted() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_files(&dir);

    // Pass b first; the serializer must not reorder.
    let buffer = serialize(&[b, a], &test_context(), &mut FixedRemark(0)).unwrap();
    let b_pos = buffer.find("BEGIN B.TXT").unwrap();
    let a_pos = buffer.find("BEGIN A.TXT").unwrap();
    assert!(b_pos < a_pos);
}

#[test]
fn unreadable_file_aborts_whole_batch() {
    let dir = TempDir::new().unwrap();
    let (a, _) = write_files(&dir);
    let missing = dir.path().join("missing.txt");

    let err = serialize(
        &[a, missing.clone()],
        &test_context(),
        &mut FixedRemark(0),
    )
    .unwrap_err();

    match err {
        ClipError::FileAccess { path, .. } => assert_eq!(path, missing),
        other => panic!("expected FileAccess, got {:?}", other),
    }
}

#[test]
fn duplicate_basenames_are_not_disambiguated() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let one = dir.path().join("same.txt");
    let two = sub.join("same.txt");
    fs::write(&one, "x").unwrap();
    fs::write(&two, "y").unwrap();

    let buffer = serialize(&[one, two], &test_context(), &mut FixedRemark(0)).unwrap();
    assert_eq!(buffer.matches("BEGIN SAME.TXT").count(), 2);
}

/// Marker-line parser mirroring what a downstream consumer would write.
fn parse_batch(buffer: &str) -> Vec<(String, u64, String)> {
    let mut files = Vec::new();
    let mut current: Option<(String, Vec<String>)> = None;

    for line in buffer.lines() {
        if let Some(rest) = line.strip_prefix("===========BEGIN ") {
            let name = rest.split(", MODIFIED ").next().unwrap().to_string();
            current = Some((name, Vec::new()));
        } else if let Some(rest) = line.strip_prefix("===========END ") {
            let (name, content_lines) = current.take().unwrap();
            let size: u64 = rest
                .strip_suffix(" BYTES===========")
                .unwrap()
                .rsplit(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            files.push((name, size, content_lines.join("\n")));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.to_string());
        }
    }
    files
}

#[test]
fn generated_batch_reparses_to_the_input() {
    let dir = TempDir::new().unwrap();
    let (a, b) = write_files(&dir);

    let buffer = serialize(&[a, b], &test_context(), &mut FixedRemark(1)).unwrap();
    let parsed = parse_batch(&buffer);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].0, "A.TXT");
    assert_eq!(parsed[0].1, 5);
    assert_eq!(parsed[0].2, "hello");
    assert_eq!(parsed[1].0, "B.TXT");
    assert_eq!(parsed[1].1, 3);
    // The format appends a newline after each file's content.
    assert_eq!(parsed[1].2.trim_end_matches('\n'), "hi");
}
