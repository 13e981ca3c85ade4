use std::path::{Path, PathBuf};

/// Base name of the prebuilt shader compiler.
pub const COMPILER_NAME: &str = "sokol-shdc";

/// The host platforms `sokol-tools-bin` ships a compiler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacosIntel,
    MacosArm,
    Linux,
}

impl Platform {
    pub fn host() -> Platform {
        Platform::from_host(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Anything that is neither Windows nor macOS falls back to the linux build.
    pub fn from_host(os: &str, arch: &str) -> Platform {
        let os = os.to_ascii_lowercase();
        let arch = arch.to_ascii_lowercase();

        match os.as_str() {
            "windows" => Platform::Windows,
            "macos" | "darwin" => {
                if arch.contains("arm") || arch.contains("aarch64") {
                    Platform::MacosArm
                } else {
                    Platform::MacosIntel
                }
            }
            _ => Platform::Linux,
        }
    }

    /// Name of the subdirectory holding this platform's binaries.
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "win32",
            Platform::MacosIntel => "osx",
            Platform::MacosArm => "osx_arm64",
            Platform::Linux => "linux",
        }
    }

    pub fn executable_name(self) -> String {
        match self {
            Platform::Windows => format!("{COMPILER_NAME}.exe"),
            _ => COMPILER_NAME.to_owned(),
        }
    }
}

/// Path of the compiler inside `tools_dir`. The file is not required to exist.
pub fn resolve_compiler_path(tools_dir: &Path, platform: Platform) -> PathBuf {
    tools_dir
        .join(platform.dir_name())
        .join(platform.executable_name())
}
