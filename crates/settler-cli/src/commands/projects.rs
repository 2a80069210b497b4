use miette::Result;

use settler_core::project::{included_projects, ROOT_PROJECT_NAME};

pub fn exec() -> Result<()> {
    println!("root project: {ROOT_PROJECT_NAME}");
    for project in included_projects() {
        println!("  include {project}");
    }
    Ok(())
}
