pub mod compile;

use std::path::{Path, PathBuf};

pub const SOURCE_EXTENSION: &str = "glsl";
pub const OUTPUT_EXTENSION: &str = "h";

/// A single source file and the header the compiler should generate for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ShaderJob {
    /// `water.glsl` compiles to `<output_dir>/water.h`.
    pub fn new(input: PathBuf, output_dir: &Path) -> ShaderJob {
        let output = output_dir
            .join(input.file_name().unwrap_or_default())
            .with_extension(OUTPUT_EXTENSION);
        ShaderJob { input, output }
    }

    pub fn input_name(&self) -> std::borrow::Cow<'_, str> {
        file_name(&self.input)
    }

    pub fn output_name(&self) -> std::borrow::Cow<'_, str> {
        file_name(&self.output)
    }
}

fn file_name(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_name().unwrap_or_default().to_string_lossy()
}

/// Matches `*.glsl` on the whole file name, so a bare `.glsl` counts too.
fn has_source_extension(path: &Path) -> bool {
    let suffix = format!(".{SOURCE_EXTENSION}");
    file_name(path).ends_with(&suffix)
}

/// Lists the shader sources directly inside `shader_dir`, in whatever order the
/// filesystem returns them. Entries that cannot be read are skipped.
pub fn discover(shader_dir: &Path) -> Vec<PathBuf> {
    let mut sources = Vec::new();

    for entry in walkdir::WalkDir::new(shader_dir).min_depth(1).max_depth(1) {
        let path = match entry {
            Ok(entry) => entry.into_path(),
            Err(error) => {
                warn!("skipping unreadable entry in {}: {error}", shader_dir.display());
                continue;
            }
        };

        if !has_source_extension(&path) || !path.is_file() {
            continue;
        }

        sources.push(path);
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::BTreeSet, fs};

    fn names(paths: &[PathBuf]) -> BTreeSet<String> {
        paths
            .iter()
            .map(|path| file_name(path).into_owned())
            .collect()
    }

    #[test]
    fn output_replaces_the_extension() {
        let job = ShaderJob::new(PathBuf::from("../shaders/water.glsl"), Path::new("out"));
        assert_eq!(job.output, Path::new("out/water.h"));
        assert_eq!(job.input_name(), "water.glsl");
        assert_eq!(job.output_name(), "water.h");
    }

    #[test]
    fn only_the_last_extension_is_replaced() {
        let job = ShaderJob::new(PathBuf::from("post.fx.glsl"), Path::new("compiled"));
        assert_eq!(job.output, Path::new("compiled/post.fx.h"));
    }

    #[test]
    fn bare_dotfile_keeps_its_name() {
        let job = ShaderJob::new(PathBuf::from("shaders/.glsl"), Path::new("compiled"));
        assert_eq!(job.output, Path::new("compiled/.glsl.h"));
    }

    #[test]
    fn discovers_a_bare_dotfile_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".glsl"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join("glsl"), "").unwrap();

        let found = discover(dir.path());

        assert_eq!(names(&found), BTreeSet::from([".glsl".to_owned()]));
    }

    #[test]
    fn discovers_only_glsl_files_at_the_top_level() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("basic.glsl"), "").unwrap();
        fs::write(dir.path().join("water.glsl"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("basic.h"), "").unwrap();
        fs::create_dir(dir.path().join("folder.glsl")).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.glsl"), "").unwrap();

        let found = discover(dir.path());

        assert_eq!(found.len(), 2);
        assert_eq!(
            names(&found),
            BTreeSet::from(["basic.glsl".to_owned(), "water.glsl".to_owned()])
        );
    }

    #[test]
    fn empty_directory_has_no_sources() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover(&dir.path().join("missing")).is_empty());
    }
}
