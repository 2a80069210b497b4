use std::path::PathBuf;

use miette::Result;

use settler_core::settings::resolve_sdk_path;

pub fn exec(project_dir: Option<PathBuf>) -> Result<()> {
    let dir = super::resolve_project_dir(project_dir)?;
    let sdk_path = resolve_sdk_path(&dir)?;
    println!("{sdk_path}");
    Ok(())
}
