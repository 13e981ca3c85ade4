use std::path::{Path, PathBuf};

pub const STAMP_FILE: &str = "shaders_compiled.stamp";

/// Where the step reads from and writes to, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub shader_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Root of the unpacked `sokol-tools-bin` subproject.
    pub tools_dir: PathBuf,
    pub stamp_path: PathBuf,
}

impl Layout {
    /// The build orchestrator runs us from `build/`; otherwise we assume we were
    /// started from inside the shaders directory. Either way the project root
    /// is one level up.
    pub fn detect(cwd: &Path) -> Layout {
        let (shader_dir, output_dir) = if cwd.file_name() == Some("build".as_ref()) {
            (
                PathBuf::from("../shaders"),
                PathBuf::from("../shaders/compiled"),
            )
        } else {
            (PathBuf::from("."), PathBuf::from("compiled"))
        };

        Layout {
            shader_dir,
            output_dir,
            tools_dir: PathBuf::from("../subprojects/sokol-tools-bin/bin"),
            stamp_path: PathBuf::from(STAMP_FILE),
        }
    }
}
