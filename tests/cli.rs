use test_util::{numbered_lines, run_clinix, write_file};

#[test]
fn cli_cat_numbers_stdin() {
    let (code, out, _) = run_clinix(&["-c", "cat -n"], "a\nb\n");
    assert_eq!(code, 0);
    assert_eq!(out, "    1  a\n    2  b\n");
}

#[test]
fn cli_single_command_argv() {
    let (code, out, _) = run_clinix(&["grep", "-v", "^#"], "#a\nb\n#c\n");
    assert_eq!(code, 0);
    assert_eq!(out, "b\n");
}

#[test]
fn cli_pipeline_with_quotes_and_redirect() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = write_file(dir.path(), "in.txt", "foo bar\nbaz\nfoo|qux\n");
    let out_path = dir.path().join("out.txt");
    let script = format!("cat {} | grep 'foo|baz' | tac > {}", f, out_path.display());
    let (code, out, err) = run_clinix(&["-c", &script], "");
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(out, "");
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "foo|qux\nbaz\nfoo bar\n");
    let append = format!("echo done >> {}", out_path.display());
    assert_eq!(run_clinix(&["-c", &append], "").0, 0);
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "foo|qux\nbaz\nfoo bar\ndone\n");
}

#[test]
fn cli_input_redirection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let f = write_file(dir.path(), "in.txt", &numbered_lines(3));
    let (code, out, _) = run_clinix(&["-c", &format!("wc -l < {}", f)], "");
    assert_eq!(code, 0);
    assert_eq!(out, "3\n");
}

#[test]
fn cli_error_records_set_exit_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let (code, out, _) = run_clinix(&["cat", &missing.to_string_lossy()], "");
    assert_eq!(code, 1);
    assert_eq!(out, format!("{}: No such file or directory\n", missing.display()));
}

#[test]
fn cli_fatal_errors_exit_two() {
    let (code, out, err) = run_clinix(&["-c", "cat --squeeze"], "");
    assert_eq!(code, 2);
    assert_eq!(out, "");
    assert!(err.contains("unrecognized option 'squeeze'"), "{}", err);
    let (code, _, err) = run_clinix(&["-c", "frobnicate x"], "");
    assert_eq!(code, 2);
    assert!(err.contains("frobnicate: command not found"), "{}", err);
    let (code, _, _) = run_clinix(&["-c", "cat > a | wc"], "");
    assert_eq!(code, 2);
    let (code, _, _) = run_clinix(&["-c", "grep 'open"], "");
    assert_eq!(code, 2);
}

#[test]
fn cli_json_records() {
    let (code, out, _) = run_clinix(&["--json", "-c", "grep -n b"], "a\nb\n");
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v[0]["status"], "match");
    assert_eq!(v[0]["file"], "<stdin>");
    assert_eq!(v[0]["line_number"], 2);
}

#[test]
fn cli_help_for_tool() {
    let (code, out, _) = run_clinix(&["--help", "wc"], "");
    assert_eq!(code, 0);
    assert!(out.contains("-l, --lines"), "{}", out);
}

#[test]
fn cli_dash_operand_reads_stdin() {
    let (code, out, _) = run_clinix(&["tac", "-"], "a\nb\n");
    assert_eq!(code, 0);
    assert_eq!(out, "b\na\n");
}
