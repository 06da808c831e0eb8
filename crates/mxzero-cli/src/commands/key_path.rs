//! Key file location.

use mxzero_config::key_file_path;

pub fn run() -> anyhow::Result<()> {
    let Some(path) = key_file_path() else {
        anyhow::bail!("no per-user data directory on this platform");
    };
    println!("{}", path.display());
    Ok(())
}
