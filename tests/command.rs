use clinix::{cat, echo, grep, wc, ClinixError, Input, Output, PipeSource};
use test_util::write_file;

#[test]
fn force_overwrite_then_repeat_truncates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");
    let cmd = echo(["a", "b"], &[]).unwrap().redirect_overwrite(&out);
    cmd.force().unwrap();
    cmd.force().unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a\nb\n");
}

#[test]
fn force_append_accumulates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("log.txt");
    std::fs::write(&out, "start\n").unwrap();
    let cmd = echo([1, 2], &[]).unwrap().redirect_append(&out);
    let outcome = cmd.force().unwrap();
    cmd.force().unwrap();
    assert_eq!(outcome.records, 2);
    assert_eq!(outcome.failures, 0);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "start\n1\n2\n1\n2\n");
}

#[test]
fn last_redirection_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let cmd = echo(["x"], &[]).unwrap().redirect_append(&first).redirect_overwrite(&second);
    assert_eq!(cmd.output(), &Output::Overwrite(second.clone()));
    cmd.force().unwrap();
    assert!(!first.exists());
    assert_eq!(std::fs::read_to_string(&second).unwrap(), "x\n");
}

#[test]
fn input_file_replaces_pipe() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = write_file(dir.path(), "in.txt", "from file\n");
    let cmd = cat(&[], &[]).unwrap().pipe_from("from pipe").set_input_file(&f);
    assert!(matches!(cmd.input(), Input::File(_)));
    assert_eq!(cmd.read_input().unwrap(), "from file\n");
    assert_eq!(cmd.render().unwrap(), "from file");
}

#[test]
fn unreadable_input_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cmd = cat(&[], &[]).unwrap().set_input_file(dir.path().join("missing"));
    match cmd.render() {
        Err(ClinixError::Input { source, .. }) => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected input error, got {:?}", other),
    }
}

#[test]
fn fatal_error_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("out.txt");
    let cmd = cat(&[], &[]).unwrap().set_input_file(dir.path().join("missing")).redirect_overwrite(&out);
    assert!(cmd.force().is_err());
    assert!(!out.exists());
}

#[test]
fn unwritable_sink_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cmd = echo(["x"], &[]).unwrap().redirect_overwrite(dir.path().join("no/such/dir/out.txt"));
    assert!(matches!(cmd.force(), Err(ClinixError::Output { .. })));
}

#[test]
fn piped_command_is_rendered_when_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = write_file(dir.path(), "f.txt", "keep\ndrop\n");
    let downstream = wc(&[], &[("l", true)]).unwrap().pipe_from(grep("keep", &[&f], &[]).unwrap());
    assert_eq!(downstream.render().unwrap(), "1");
    std::fs::write(&f, "keep\nkeep too\ndrop\n").unwrap();
    assert_eq!(downstream.render().unwrap(), "2");
}

#[test]
fn piped_values_are_stringified() {
    let lines = cat(&[], &[]).unwrap().pipe_from(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(lines.read_input().unwrap(), "a\nb");
    let number = cat(&[], &[]).unwrap().pipe_from(PipeSource::value(42));
    assert_eq!(number.render().unwrap(), "42");
}

#[test]
fn echo_renders_display_of_each_item() {
    assert_eq!(echo([3.5, 1.0], &[]).unwrap().render().unwrap(), "3.5\n1");
    assert_eq!(echo(Vec::<String>::new(), &[]).unwrap().render().unwrap(), "");
    assert!(echo(["x"], &[("n", true)]).is_err());
}

#[test]
fn display_describes_without_evaluating() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let cmd = cat(&["a.txt"], &[("n", true)]).unwrap().set_input_file(&missing).redirect_append("out.txt");
    assert_eq!(cmd.to_string(), format!("cat --number a.txt < {} >> out.txt", missing.display()));
    let piped = wc(&[], &[]).unwrap().pipe_from(cat(&["a.txt"], &[]).unwrap());
    assert_eq!(piped.to_string(), "cat a.txt | wc");
}
