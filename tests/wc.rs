use clinix::{wc, Counts, WcRecord};
use test_util::write_file;

#[test]
fn wc_counts_lines_words_chars() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = write_file(dir.path(), "f.txt", "hello world\nfoo\n\nbar baz qux\n");
    let records = wc(&[&f], &[]).unwrap().evaluate().unwrap();
    assert_eq!(records, vec![WcRecord::Counts { file: f.clone(), counts: Counts { lines: 4, words: 6, bytes: 29 } }]);
}

#[test]
fn wc_total_sums_successes_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = write_file(dir.path(), "a.txt", "one two\nthree\n");
    let b = write_file(dir.path(), "b.txt", "four\n");
    let missing = dir.path().join("missing.txt").to_string_lossy().to_string();
    let records = wc(&[&a, &missing, &b], &[]).unwrap().evaluate().unwrap();
    assert_eq!(records.len(), 4);
    assert!(matches!(&records[1], WcRecord::Error { file, .. } if *file == missing));
    let mut sum = Counts::default();
    for r in &records[..3] { if let WcRecord::Counts { counts, .. } = r { sum += *counts; } }
    assert_eq!(records[3], WcRecord::Counts { file: "total".to_string(), counts: sum });
    assert_eq!(sum, Counts { lines: 3, words: 4, bytes: 19 });
}

#[test]
fn wc_single_file_has_no_total() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = write_file(dir.path(), "a.txt", "x\n");
    assert_eq!(wc(&[&a], &[]).unwrap().evaluate().unwrap().len(), 1);
}

#[test]
fn wc_restricted_columns_render() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = write_file(dir.path(), "a.txt", "one two\nthree\n");
    let b = write_file(dir.path(), "b.txt", "a b c d e f g h i j k\n");
    let out = wc(&[&a, &b], &[("l", true), ("words", true)]).unwrap().render().unwrap();
    assert_eq!(out, format!(" 2  3 {}\n 1 11 {}\n 3 14 total", a, b));
}

#[test]
fn wc_stdin_has_empty_subject() {
    let cmd = wc(&[], &[]).unwrap().pipe_from("a b\nc\n");
    let records = cmd.evaluate().unwrap();
    assert_eq!(records, vec![WcRecord::Counts { file: String::new(), counts: Counts { lines: 2, words: 3, bytes: 6 } }]);
    assert_eq!(cmd.render().unwrap(), "2 3 6");
}

#[test]
fn wc_total_skips_invalid_utf8() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("bad.bin");
    std::fs::write(&bad, [0xff, 0xfe, b'\n']).expect("write fixture");
    let bad = bad.to_string_lossy().to_string();
    let good = write_file(dir.path(), "good.txt", "a\n");
    let cmd = wc(&[&bad, &good], &[]).unwrap();
    let records = cmd.evaluate().unwrap();
    assert!(matches!(&records[0], WcRecord::Error { file, .. } if *file == bad));
    assert_eq!(records[2], WcRecord::Counts { file: "total".to_string(), counts: Counts { lines: 1, words: 1, bytes: 2 } });
    assert!(cmd.render().unwrap().ends_with("1 1 2 total"));
}
