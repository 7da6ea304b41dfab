use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output path for a run.
///
/// An explicit path is returned unchanged. Otherwise the result sits next to
/// `input` (as an absolute path) and is named `<stem>-<tag><.ext>`, e.g.
/// `/a/b/c.png` with tag `mask` becomes `/a/b/c-mask.png`.
///
/// Only the working directory is consulted, to absolutize a relative input.
pub fn resolve_output(input: &Path, explicit: Option<&Path>, tag: &str) -> PathBuf {
    if let Some(output) = explicit {
        return output.to_path_buf();
    }

    let absolute = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
    let dir = absolute.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push("-");
    name.push(tag);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    dir.join(name)
}

/// Default output for a generated palette: derived from `<palette>.png`.
pub fn palette_output(palette: &Path, explicit: Option<&Path>, tag: &str) -> PathBuf {
    let mut base = palette.as_os_str().to_os_string();
    base.push(".png");
    resolve_output(Path::new(&base), explicit, tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_absolute_input() {
        assert_eq!(
            resolve_output(Path::new("/a/b/c.png"), None, "mask"),
            PathBuf::from("/a/b/c-mask.png")
        );
    }

    #[test]
    fn test_explicit_output_verbatim() {
        assert_eq!(
            resolve_output(
                Path::new("/a/b/c.png"),
                Some(Path::new("relative/out.bmp")),
                "mask"
            ),
            PathBuf::from("relative/out.bmp")
        );
    }

    #[test]
    fn test_relative_input_is_made_absolute() {
        let resolved = resolve_output(Path::new("sprites/hero.png"), None, "new");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("sprites/hero-new.png"));
    }

    #[test]
    fn test_only_last_extension_split() {
        assert_eq!(
            resolve_output(Path::new("/x/archive.tar.gz"), None, "mask"),
            PathBuf::from("/x/archive.tar-mask.gz")
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(
            resolve_output(Path::new("/x/sprite"), None, "mask"),
            PathBuf::from("/x/sprite-mask")
        );
    }

    #[test]
    fn test_palette_output_appends_png() {
        assert_eq!(
            palette_output(Path::new("/p/colors"), None, "pal"),
            PathBuf::from("/p/colors-pal.png")
        );
        assert_eq!(
            palette_output(Path::new("/p/colors.gpl"), None, "pal"),
            PathBuf::from("/p/colors.gpl-pal.png")
        );
    }
}
