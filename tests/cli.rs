use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SOURCE: &str = "\
001 RPL_WELCOME
:server 001 <nick> :Welcome to the network
- Sent on connect.
- Second line.

433 ERR_NICKNAMEINUSE
- Nick is already in use.

002 RPL_YOURHOST
";

fn generate(dir: &Path) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_numeric-replies"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .assert()
}

#[test]
fn generates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("replies_raw"), SOURCE).unwrap();

    generate(dir.path())
        .success()
        .stderr(predicate::str::contains("replies parsed"));

    let enumeration = fs::read_to_string(dir.path().join("replies.ipp")).unwrap();
    assert_eq!(
        enumeration,
        "enum class numeric_reply : int {\n\n\
         \x20   /// example: :server 001 <nick> :Welcome to the network\n\
         \x20   /// description:\n\
         \x20   ///  Sent on connect.\n\
         \x20   ///  Second line.\n\
         \x20   RPL_WELCOME = 1,\n\n\
         \x20   /// description:\n\
         \x20   ///  Nick is already in use.\n\
         \x20   ERR_NICKNAMEINUSE = 433,\n\n\
         \x20   RPL_YOURHOST = 2,\n\n\
         };"
    );

    let table = fs::read_to_string(dir.path().join("reply_list.ipp")).unwrap();
    assert_eq!(
        table,
        "static constexpr std::pair<int, const char*> valid_replies[] = { \
         {1, \"RPL_WELCOME\"}, {2, \"RPL_YOURHOST\"}, {433, \"ERR_NICKNAMEINUSE\"} };"
    );
}

#[test]
fn output_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("replies_raw"), SOURCE).unwrap();

    generate(dir.path()).success();
    let first = fs::read(dir.path().join("replies.ipp")).unwrap();
    let first_table = fs::read(dir.path().join("reply_list.ipp")).unwrap();

    generate(dir.path()).success();
    assert_eq!(first, fs::read(dir.path().join("replies.ipp")).unwrap());
    assert_eq!(first_table, fs::read(dir.path().join("reply_list.ipp")).unwrap());
}

#[test]
fn blank_source() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("replies_raw"), "\n\n").unwrap();

    generate(dir.path()).success();

    assert_eq!(
        fs::read_to_string(dir.path().join("replies.ipp")).unwrap(),
        "enum class numeric_reply : int {\n\n};"
    );

    assert_eq!(
        fs::read_to_string(dir.path().join("reply_list.ipp")).unwrap(),
        "static constexpr std::pair<int, const char*> valid_replies[] = {  };"
    );
}

#[test]
fn expected_reply() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("replies_raw"), "RPL_WELCOME\n001 RPL_WELCOME\n").unwrap();

    generate(dir.path())
        .failure()
        .stderr(predicate::str::contains("expected reply"));

    assert!(!dir.path().join("replies.ipp").exists());
    assert!(!dir.path().join("reply_list.ipp").exists());
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();

    generate(dir.path())
        .failure()
        .stderr(predicate::str::contains("replies_raw"));
}
