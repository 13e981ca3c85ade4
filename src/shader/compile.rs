use std::{
    path::{Path, PathBuf},
    process::Command,
};

use super::ShaderJob;

/// glsl410: desktop GL 4.1 (the highest macOS supports), glsl300es: GLES3 and
/// WebGL2, hlsl5: D3D11, metal_macos, wgsl: WebGPU.
pub const TARGET_LANGUAGES: &str = "glsl410:glsl300es:hlsl5:metal_macos:wgsl";
pub const OUTPUT_FORMAT: &str = "sokol";

/// Runs the external `sokol-shdc` binary.
#[derive(Debug, Clone)]
pub struct ShaderCompiler {
    path: PathBuf,
}

impl ShaderCompiler {
    pub fn new(path: impl Into<PathBuf>) -> ShaderCompiler {
        ShaderCompiler { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_available(&self) -> bool {
        self.path.exists()
    }

    fn command(&self, job: &ShaderJob) -> Command {
        let mut command = Command::new(&self.path);
        command
            .arg("--input")
            .arg(&job.input)
            .arg("--output")
            .arg(&job.output)
            .args(["--slang", TARGET_LANGUAGES])
            .args(["--format", OUTPUT_FORMAT]);
        command
    }

    /// Compiles one shader, blocking until the compiler exits. Every failure is
    /// logged and reported as `false`.
    pub fn compile(&self, job: &ShaderJob) -> bool {
        let output = match self.command(job).output() {
            Ok(output) => output,
            Err(error) => {
                error!("Error running shader compiler: {error}");
                return false;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim_end());
        }

        if output.status.success() {
            info!(
                "[OK] Compiled {} -> {}",
                job.input.display(),
                job.output.display()
            );
            true
        } else {
            error!("[ERROR] Failed to compile {}", job.input.display());
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                error!("{}", stderr.trim_end());
            }
            false
        }
    }
}
