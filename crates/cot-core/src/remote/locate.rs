//! Work out which application bundle to address.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CotConfig;
use crate::config::defaults::DEFAULT_APPLICATION;

/// Pick the application name or bundle path to drive.
///
/// Priority: configured name (config file or `COT_APPLICATION`) > `.app`
/// bundle enclosing the running executable > default editor name.
pub fn locate_application(config: &CotConfig) -> String {
    if let Some(name) = &config.application.name {
        debug!(event = "core.remote.locate_completed", source = "config", application = %name);
        return name.clone();
    }

    let exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok());
    if let Some(bundle) = exe.as_deref().and_then(enclosing_bundle) {
        let bundle = bundle.to_string_lossy().into_owned();
        debug!(event = "core.remote.locate_completed", source = "executable", application = %bundle);
        return bundle;
    }

    debug!(
        event = "core.remote.locate_completed",
        source = "default",
        application = DEFAULT_APPLICATION
    );
    DEFAULT_APPLICATION.to_string()
}

/// The nearest ancestor directory with an `.app` extension, if any.
///
/// The CLI ships inside the editor bundle at `Editor.app/Contents/SharedSupport/bin/`.
pub fn enclosing_bundle(executable: &Path) -> Option<PathBuf> {
    executable
        .ancestors()
        .skip(1)
        .find(|dir| dir.extension().is_some_and(|ext| ext == "app"))
        .map(Path::to_path_buf)
}

/// Human-readable application name: the bundle name without `.app` for a path.
pub fn application_display_name(application: &str) -> String {
    let path = Path::new(application);
    match (path.extension(), path.file_stem()) {
        (Some(ext), Some(stem)) if ext == "app" => stem.to_string_lossy().into_owned(),
        _ => application.to_string(),
    }
}
