//! File name splitting and permalink relocation paths.

/// Extension assumed when a file name has none.
pub const DEFAULT_EXTENSION: &str = ".html";

/// Split the last path segment into base name and extension.
///
/// The extension is the last `.` followed by at least one character; the
/// dot is included. Names without one get [`DEFAULT_EXTENSION`].
///
/// # Example
/// ```
/// use simple_pagination::util::split_file_name;
///
/// assert_eq!(split_file_name("blog/post1.md"), ("post1", ".md"));
/// assert_eq!(split_file_name("blog/archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_file_name("blog/README"), ("README", ".html"));
/// ```
pub fn split_file_name(path: &str) -> (&str, &str) {
    let name = path.rsplit('/').next().unwrap_or(path);

    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => (&name[..dot], &name[dot..]),
        _ => (name, DEFAULT_EXTENSION),
    }
}

/// Permalink-style destination: `<directory>/<base>/index<ext>`.
pub fn permalink_path(directory: &str, old_path: &str) -> String {
    let (base, extension) = split_file_name(old_path);
    format!("{directory}/{base}/index{extension}")
}
