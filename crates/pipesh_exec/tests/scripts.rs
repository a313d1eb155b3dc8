#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, sync::Arc};

use parking_lot::Mutex;
use pipesh_core::{Host, SharedHost};
use pipesh_exec::Dispatcher;

#[derive(Default)]
struct RecordingHost {
    stderr: Vec<String>,
}

impl Host for RecordingHost {
    fn eprintln(&mut self, text: &str) {
        self.stderr.push(text.to_owned());
    }
}

// Kept as the only test in this binary. Writing an executable while other
// threads spawn processes can fail with "text file busy".
#[test]
fn executables_without_an_interpreter_line_run_as_shell_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("script");
    let out = dir.path().join("out");
    fs::write(&script, "printf ran\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let host = Arc::new(Mutex::new(RecordingHost::default()));
    let shared: SharedHost = host.clone();
    let builtins = pipesh_builtins::registry();
    let dispatcher = Dispatcher::new(&builtins, shared);

    let mut should_exit = false;
    let line = format!("'{}' > '{}'", script.display(), out.display());
    let status = dispatcher.run_line(&line, 0, &mut should_exit);

    assert_eq!(status, 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), "ran");
    assert!(host.lock().stderr.is_empty());
}
