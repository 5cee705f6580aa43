use std::process::Command;

fn run_obgen(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_obgen"))
        .args(args)
        .output()
        .expect("spawn obgen");
    assert!(out.status.success(), "obgen exited non-zero");
    String::from_utf8(out.stdout).expect("stdout is utf8")
}

#[test]
fn integration_pattern_and_command() {
    let input = obgen_lib::generate::pattern(5, 5, 5);
    assert_eq!(input, "aaaaabbbbbccccc");
    let cmd = obgen_lib::command::format_command(&Default::default(), &input);
    assert_eq!(
        cmd,
        "./obparser -g ./tests/an_bn_cn -i aaaaabbbbbccccc -o tree.dot"
    );
}

#[test]
fn integration_explicit_count() {
    let out = run_obgen(&["5"]);
    assert_eq!(
        out,
        "TImes 5\n./obparser -g ./tests/an_bn_cn -i aaaaabbbbbccccc -o tree.dot\n"
    );
}

#[test]
fn integration_no_argument_defaults_to_1000() {
    let out = run_obgen(&[]);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("TImes 1000"));
    let cmd = lines.next().expect("command line");
    let input = cmd
        .strip_prefix("./obparser -g ./tests/an_bn_cn -i ")
        .and_then(|s| s.strip_suffix(" -o tree.dot"))
        .expect("command template");
    assert_eq!(input.len(), 3000);
}

#[test]
fn integration_unparsable_argument_defaults_to_1000() {
    assert_eq!(run_obgen(&["abc"]), run_obgen(&[]));
}

#[test]
fn integration_zero_count_leaves_two_spaces() {
    let out = run_obgen(&["0"]);
    assert_eq!(
        out,
        "TImes 0\n./obparser -g ./tests/an_bn_cn -i  -o tree.dot\n"
    );
}

#[test]
fn integration_output_is_idempotent() {
    assert_eq!(run_obgen(&["7"]), run_obgen(&["7"]));
}

#[test]
fn integration_per_run_overrides() {
    let out = run_obgen(&["2", "--c-count", "4"]);
    assert_eq!(
        out,
        "TImes 2\n./obparser -g ./tests/an_bn_cn -i aabbcccc -o tree.dot\n"
    );
}

#[test]
fn integration_path_overrides() {
    let out = run_obgen(&["1", "-g", "./grammars/abc", "-o", "out.dot"]);
    assert_eq!(out, "TImes 1\n./obparser -g ./grammars/abc -i abc -o out.dot\n");
}
