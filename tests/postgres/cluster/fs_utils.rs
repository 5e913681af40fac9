//! Filesystem helpers for the embedded cluster.

use super::BoxError;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use postgresql_embedded::Settings;

fn open_parent_dir(path: &Utf8Path) -> Result<(Dir, &str), BoxError> {
    let file_name = path.file_name().ok_or_else(|| {
        Box::new(std::io::Error::other("path must include a file name")) as BoxError
    })?;
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Reads back the password the bootstrap wrote, if any.
pub(super) fn sync_password_from_file(settings: &mut Settings) -> Result<(), BoxError> {
    let password_path = settings.password_file.to_string_lossy();
    let (dir, file_name) = open_parent_dir(Utf8Path::new(password_path.as_ref()))?;
    match dir.read_to_string(file_name) {
        Ok(contents) => {
            let password = contents.trim_end();
            if !password.is_empty() {
                password.clone_into(&mut settings.password);
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Picks up the port the server actually bound from `postmaster.pid`.
pub(super) fn sync_port_from_pid(settings: &mut Settings) -> Result<(), BoxError> {
    let data_dir = settings.data_dir.to_string_lossy();
    let dir = Dir::open_ambient_dir(Utf8Path::new(data_dir.as_ref()), ambient_authority())?;
    let contents = match dir.read_to_string("postmaster.pid") {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    // Fourth line of postmaster.pid is the port.
    let port = contents
        .lines()
        .nth(3)
        .and_then(|line| line.trim().parse::<u16>().ok());
    if let Some(bound) = port {
        settings.port = bound;
    }
    Ok(())
}
