use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_catalog(typed: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_peripheral-catalog"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(typed.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_not_found_writes_nothing_to_stderr() {
    let output = run_catalog("4\n");

    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .ends_with("Устройство не найдено.\n"));
}

#[test]
fn test_invalid_input_writes_nothing_to_stderr() {
    let output = run_catalog("x\n");

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .ends_with("Некорректный ввод.\n"));
}

#[test]
fn test_exit_selection() {
    let output = run_catalog("0\n");
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.starts_with("Список устройств:\n1. Наушники: Sennheiser HD202\n"));
    assert!(stdout.ends_with("Выход из программы.\n"));
}
