use std::path::Path;

/// Launch `target` fire-and-forget.
///
/// Plain executables (or anything with trailing arguments) are spawned
/// directly; everything else is handed to the OS default handler, the same
/// as double-clicking it. The spawned process is never waited on and its
/// output is not captured.
///
/// Returns an error if spawning fails; the caller must only count the launch
/// after this succeeds.
pub fn launch_path(target: &str) -> anyhow::Result<()> {
    let (program, args) = split_target(target);
    let path = Path::new(&program);
    let is_exe = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("exe"))
        .unwrap_or(false);

    if is_exe || !args.is_empty() {
        let mut command = std::process::Command::new(path);
        command.args(&args);
        command.spawn().map(|_| ()).map_err(|e| e.into())
    } else {
        open::that(path).map_err(|e| e.into())
    }
}

/// Split a stored target into program and arguments.
///
/// Targets coming from the file picker are bare paths and pass through
/// unchanged; hand-typed command strings are split with shell-style quoting
/// when the whole string is not itself an existing file.
fn split_target(target: &str) -> (String, Vec<String>) {
    let trimmed = target.trim();
    if Path::new(trimmed).exists() || !trimmed.contains(' ') {
        return (trimmed.to_string(), Vec::new());
    }
    match shlex::split(trimmed) {
        Some(mut parts) if parts.len() > 1 => {
            let args = parts.split_off(1);
            (parts.remove(0), args)
        }
        _ => (trimmed.to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::split_target;

    #[test]
    fn bare_path_passes_through() {
        let (prog, args) = split_target("/usr/bin/editor");
        assert_eq!(prog, "/usr/bin/editor");
        assert!(args.is_empty());
    }

    #[test]
    fn command_string_splits_arguments() {
        let (prog, args) = split_target("mytool --flag \"two words\"");
        assert_eq!(prog, "mytool");
        assert_eq!(args, vec!["--flag".to_string(), "two words".to_string()]);
    }

    #[test]
    fn existing_path_with_spaces_is_not_split() {
        let dir = tempfile::tempdir().unwrap();
        let spaced = dir.path().join("some file.txt");
        std::fs::write(&spaced, "x").unwrap();
        let target = spaced.to_str().unwrap().to_string();
        let (prog, args) = split_target(&target);
        assert_eq!(prog, target);
        assert!(args.is_empty());
    }
}
