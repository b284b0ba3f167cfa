//! Shared test utilities: canned provider audio and fake ffmpeg executables.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Bytes the fake provider serves for every chunk. Content is irrelevant;
/// tests only compare and count bytes.
pub const FAKE_MP3: &[u8] = b"ID3 fake mpeg audio frames for tests";

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_stub(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    std::fs::write(&path, script).expect("write stub script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("make stub executable");
    path
}

/// Fake ffmpeg that succeeds: answers the version probe, and for filter runs
/// copies the input to the output with one extra byte appended so stretched
/// output is distinguishable from the raw audio. Every invocation is
/// appended to `log` as one line of arguments.
#[cfg(unix)]
pub fn transforming_stub(dir: &Path, log: &Path) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
if [ "$1" = "-version" ]; then
  exit 0
fi
in=""
prev=""
last=""
for a in "$@"; do
  if [ "$prev" = "-i" ]; then
    in="$a"
  fi
  prev="$a"
  last="$a"
done
cp "$in" "$last" || exit 1
printf 'S' >> "$last"
exit 0
"#,
        log = log.display()
    );
    write_stub(dir, "ffmpeg-ok", &script)
}

/// Fake ffmpeg that answers the version probe but fails every filter run.
#[cfg(unix)]
pub fn failing_stub(dir: &Path, log: &Path) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
if [ "$1" = "-version" ]; then
  exit 0
fi
echo "simulated filter failure" >&2
exit 1
"#,
        log = log.display()
    );
    write_stub(dir, "ffmpeg-fail", &script)
}

/// Fake ffmpeg whose version probe fails, i.e. an unusable installation.
#[cfg(unix)]
pub fn unavailable_stub(dir: &Path) -> PathBuf {
    write_stub(dir, "ffmpeg-off", "#!/bin/sh\nexit 1\n")
}

/// Extract the input path (`-i <path>`) from a stub invocation log.
pub fn recorded_input(log_contents: &str) -> Option<PathBuf> {
    let mut tokens = log_contents.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "-i" {
            return tokens.next().map(PathBuf::from);
        }
    }
    None
}
