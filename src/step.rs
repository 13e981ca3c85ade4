use std::{fs, path::PathBuf};

use anyhow::Context;

use crate::{
    layout::Layout,
    platform::{self, Platform},
    shader::{self, compile::ShaderCompiler, ShaderJob},
};

pub const COMPILER_MISSING_STAMP: &str = "No shaders compiled - compiler not available";

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    CompilerMissing,
    Compiled { discovered: usize, compiled: usize },
}

impl Summary {
    /// Contents of the stamp file. Only counts discovered shaders, so repeated
    /// runs over the same inputs produce the same stamp.
    pub fn stamp_text(&self) -> String {
        match self {
            Summary::CompilerMissing => COMPILER_MISSING_STAMP.to_owned(),
            Summary::Compiled { discovered, .. } => format!("Compiled {discovered} shaders"),
        }
    }

    /// Shaders that were found but did not compile.
    pub fn failed(&self) -> usize {
        match *self {
            Summary::CompilerMissing => 0,
            Summary::Compiled {
                discovered,
                compiled,
            } => discovered.saturating_sub(compiled),
        }
    }
}

pub struct BuildStep {
    pub shader_dir: PathBuf,
    pub output_dir: PathBuf,
    pub stamp_path: PathBuf,
    pub compiler: ShaderCompiler,
}

impl BuildStep {
    /// The step for a working directory laid out as `layout`, using the
    /// compiler built for `platform`.
    pub fn from_layout(layout: Layout, platform: Platform) -> BuildStep {
        let compiler = platform::resolve_compiler_path(&layout.tools_dir, platform);
        BuildStep {
            shader_dir: layout.shader_dir,
            output_dir: layout.output_dir,
            stamp_path: layout.stamp_path,
            compiler: ShaderCompiler::new(compiler),
        }
    }

    /// Compiles every shader source it finds and writes the stamp.
    ///
    /// Only filesystem failures on the step's own directories and stamp are
    /// errors. A missing compiler or a shader that fails to compile is logged
    /// and the run still succeeds.
    pub fn run(&self) -> anyhow::Result<Summary> {
        for dir in [&self.shader_dir, &self.output_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("could not create directory '{}'", dir.display()))?;
        }

        if !self.compiler.is_available() {
            info!(
                "Note: shader compiler not found at {}",
                self.compiler.path().display()
            );
            info!("Shaders will be compiled when sokol-shdc is available");
            return self.finish(Summary::CompilerMissing);
        }

        info!(
            "[OK] Shader compiler found at: {}",
            self.compiler.path().display()
        );

        let sources = shader::discover(&self.shader_dir);
        let discovered = sources.len();
        let mut compiled = 0;

        if sources.is_empty() {
            info!("No shader files found in {}", self.shader_dir.display());
        } else {
            info!("Found {discovered} shader file(s) to compile");

            for source in sources {
                let job = ShaderJob::new(source, &self.output_dir);
                info!("Compiling: {} -> {}", job.input_name(), job.output_name());
                if self.compiler.compile(&job) {
                    compiled += 1;
                }
            }

            info!("Successfully compiled {compiled}/{discovered} shader(s)");
        }

        self.finish(Summary::Compiled {
            discovered,
            compiled,
        })
    }

    fn finish(&self, summary: Summary) -> anyhow::Result<Summary> {
        fs::write(&self.stamp_path, summary.stamp_text()).with_context(|| {
            format!(
                "could not write stamp file '{}'",
                self.stamp_path.display()
            )
        })?;
        Ok(summary)
    }
}
