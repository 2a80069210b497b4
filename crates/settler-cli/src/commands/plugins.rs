use miette::Result;

use settler_core::plugin::declared_plugins;

pub fn exec() -> Result<()> {
    for plugin in declared_plugins() {
        let applied = if plugin.apply { "apply" } else { "apply false" };
        println!("{} {} ({applied})", plugin.id, plugin.version);
    }
    Ok(())
}
