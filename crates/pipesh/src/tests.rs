use std::{fs, sync::Arc};

use parking_lot::Mutex;
use pipesh_core::{Host, SharedHost};
use pipesh_exec::Dispatcher;

use crate::{
    exit_code, run_shell,
    shell::{command::SingleCommandShell, file::BufferShell},
};

#[derive(Default)]
struct SilentHost;
impl Host for SilentHost {
    fn eprintln(&mut self, _: &str) {}
}

fn run_script(script: &str) -> i32 {
    let builtins = pipesh_builtins::registry();
    let host: SharedHost = Arc::new(Mutex::new(SilentHost));
    let dispatcher = Dispatcher::new(&builtins, host);
    run_shell(&mut BufferShell::new(script.as_bytes()), &dispatcher)
}

#[test]
fn it_returns_the_last_status() {
    assert_eq!(run_script("true\nfalse\n"), 1);
    assert_eq!(run_script("false\ntrue\n"), 0);
}

#[test]
fn blank_lines_keep_the_last_status() {
    assert_eq!(run_script("false\n\n# comment\n"), 1);
}

#[test]
fn it_stops_after_exit() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("marker");
    let script = format!("exit 4\ntouch '{}'\n", marker.display());

    assert_eq!(run_script(&script), 4);
    assert!(!marker.exists());
}

#[test]
fn exit_defaults_to_the_last_status() {
    assert_eq!(run_script("false\nexit\n"), 1);
}

#[test]
fn it_continues_after_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let script = format!("| broken\nprintf ok > '{}'\n", out.display());

    assert_eq!(run_script(&script), 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "ok");
}

#[test]
fn it_runs_single_commands() {
    let builtins = pipesh_builtins::registry();
    let host: SharedHost = Arc::new(Mutex::new(SilentHost));
    let dispatcher = Dispatcher::new(&builtins, host);

    let mut shell = SingleCommandShell::new("sh -c 'exit 12'".into());
    assert_eq!(run_shell(&mut shell, &dispatcher), 12);
}

#[test]
fn exit_codes_are_clamped() {
    assert_eq!(exit_code(0), 0);
    assert_eq!(exit_code(127), 127);
    assert_eq!(exit_code(-1), 255);
    assert_eq!(exit_code(1000), 255);
}
