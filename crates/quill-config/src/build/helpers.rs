use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_public_path() -> String {
    "/_quill/".to_string()
}

pub(crate) fn default_name_delimiter() -> String {
    ".".to_string()
}

pub(crate) fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_build_dir() -> PathBuf {
    PathBuf::from(".quill")
}

pub(crate) fn default_app_template_path() -> PathBuf {
    PathBuf::from(".quill/views/app.template.html")
}

pub(crate) fn default_router_base() -> String {
    "/".to_string()
}

pub(crate) fn default_terser() -> crate::build::FeatureToggle {
    crate::build::FeatureToggle::Flag(true)
}
