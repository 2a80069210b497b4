use std::path::{Path, PathBuf};

/// Name of the root project.
pub const ROOT_PROJECT_NAME: &str = "smart_plug";

/// Gradle tooling build shipped inside the Flutter SDK, relative to its root.
const FLUTTER_TOOLS_GRADLE_DIR: &str = "packages/flutter_tools/gradle";

/// Subprojects included in the build graph.
pub fn included_projects() -> Vec<String> {
    vec![":app".to_string()]
}

/// Location of the `flutter_tools` Gradle build inside the SDK, wired in as
/// an included build so its plugins resolve before any repository lookup.
pub fn flutter_tools_gradle(sdk_path: &str) -> PathBuf {
    Path::new(sdk_path).join(FLUTTER_TOOLS_GRADLE_DIR)
}
