use std::io::Write;
use std::process::{Command, Output, Stdio};

fn unblack(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_unblack"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn unblack");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait for unblack")
}

fn solved_pgm() -> String {
    let mut text = String::from("P2\n9 9\n9\n");
    for r in 0..9 {
        let row: Vec<String> = (0..9)
            .map(|c| ((r * 3 + r / 3 + c) % 9 + 1).to_string())
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    text
}

#[test]
fn test_edges_from_stdin() {
    let out = unblack(&["edges"], b"P1\n3 3\n111\n111\n111\n");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "P1\n3 3\n000\n000\n000\n");
}

#[test]
fn test_edges_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"P1\n3 3\n000\n010\n000\n").unwrap();
    file.flush().unwrap();

    let out = unblack(&["edges", file.path().to_str().unwrap()], b"");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "P1\n3 3\n000\n010\n000\n");
}

#[test]
fn test_edges_raw_output() {
    let out = unblack(&["edges", "--encoding", "raw"], b"P1 2 1 10");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"P4\n2 1\n\x00");
}

#[test]
fn test_edges_rejects_extra_arguments() {
    let out = unblack(&["edges", "a.pbm", "b.pbm"], b"");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_edges_bad_input_writes_nothing() {
    let out = unblack(&["edges"], b"P1\n2 2\n11\n");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_edges_rejects_graymap() {
    let out = unblack(&["edges"], b"P2 1 1 9 3");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_sudoku_exit_status() {
    let solved = solved_pgm();
    assert!(unblack(&["sudoku"], solved.as_bytes()).status.success());

    let broken = solved.replacen("P2\n9 9\n9\n1", "P2\n9 9\n9\n2", 1);
    assert!(!unblack(&["sudoku"], broken.as_bytes()).status.success());
}

#[test]
fn test_config_file_sets_encoding() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    config.write_all(b"[output]\nencoding = \"raw\"\n").unwrap();
    config.flush().unwrap();

    let out = unblack(
        &["--config", config.path().to_str().unwrap(), "edges"],
        b"P1 1 1 1",
    );
    assert!(out.status.success());
    assert_eq!(out.stdout, b"P4\n1 1\n\x00");
}

#[test]
fn test_config_prints_defaults() {
    let out = unblack(&["config"], b"");
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.contains("encoding = \"plain\""), "got: {text}");
    assert!(text.contains("box_size = 3"), "got: {text}");
}
