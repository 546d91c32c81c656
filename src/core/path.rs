//! Relative-path arithmetic inside the output tree.
//!
//! All paths are output paths relative to the output root, using `/`
//! separators. Nothing here touches the filesystem.
//!
//! - `relative_from_file`: target as seen from the anchor page's directory
//! - `relative_from_root`: target as seen from the output root

use super::target::is_from_root;

/// Resolve `target` against `anchor` into normalized output-root segments.
///
/// Root-relative targets are re-anchored at the output root, everything
/// else at the anchor's directory. `..` never climbs above the root.
fn resolve_segments<'a>(target: &'a str, anchor: &'a str) -> Vec<&'a str> {
    let (mut segments, rest) = if is_from_root(target) {
        (Vec::new(), &target[1..])
    } else {
        (anchor_dir(anchor), target)
    };
    push_segments(&mut segments, rest);
    segments
}

/// Normalized directory segments of the anchor page.
fn anchor_dir(anchor: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    push_segments(&mut segments, anchor);
    // Anchor names a file unless written as a directory
    if !anchor.ends_with('/') {
        segments.pop();
    }
    segments
}

/// Normalized segments of the anchor page itself.
fn anchor_file(anchor: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    push_segments(&mut segments, anchor);
    segments
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, path: &'a str) {
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part),
        }
    }
}

/// Re-append the trailing slash a directory-style target was written with.
fn with_trailing_slash(mut path: String, target: &str) -> String {
    if target.ends_with('/') && !path.is_empty() && !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Shortest relative path from the anchor's directory to `target`.
///
/// Returns an empty string when the target resolves to the anchor itself
/// (or to the anchor's directory); callers that emit links special-case it.
///
/// # Examples
/// ```
/// use assetref::core::relative_from_file;
/// assert_eq!(relative_from_file("image.png", "index.html"), "image.png");
/// assert_eq!(relative_from_file("/image.png", "blog/index.html"), "../image.png");
/// assert_eq!(relative_from_file("index.html", "index.html"), "");
/// ```
pub fn relative_from_file(target: &str, anchor: &str) -> String {
    let to = resolve_segments(target, anchor);
    if to == anchor_file(anchor) {
        return String::new();
    }

    let from = anchor_dir(anchor);
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let parts: Vec<&str> = std::iter::repeat_n("..", from.len() - common)
        .chain(to[common..].iter().copied())
        .collect();

    with_trailing_slash(parts.join("/"), target)
}

/// Path of `target` relative to the output root (no leading slash).
///
/// # Examples
/// ```
/// use assetref::core::relative_from_root;
/// assert_eq!(relative_from_root("image.png", "blog/index.html"), "blog/image.png");
/// assert_eq!(relative_from_root("/assets/a.css", "blog/index.html"), "assets/a.css");
/// ```
pub fn relative_from_root(target: &str, anchor: &str) -> String {
    with_trailing_slash(resolve_segments(target, anchor).join("/"), target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_same_directory() {
        assert_eq!(relative_from_file("image.png", "index.html"), "image.png");
        assert_eq!(relative_from_file("./image.png", "index.html"), "image.png");
        assert_eq!(
            relative_from_file("image.png", "blog/index.html"),
            "image.png"
        );
    }

    #[test]
    fn test_from_file_root_relative() {
        assert_eq!(
            relative_from_file("/blog/image.png", "index.html"),
            "blog/image.png"
        );
        assert_eq!(
            relative_from_file("/image.png", "blog/index.html"),
            "../image.png"
        );
        assert_eq!(
            relative_from_file("/image.png", "blog/2024/post/index.html"),
            "../../../image.png"
        );
    }

    #[test]
    fn test_from_file_two_levels_up() {
        assert_eq!(
            relative_from_file("../../a.css", "a/b/index.html"),
            "../../a.css"
        );
        assert_eq!(relative_from_file("/a.css", "a/b/index.html"), "../../a.css");
    }

    #[test]
    fn test_from_file_sibling_directories() {
        assert_eq!(
            relative_from_file("/docs/guide/", "blog/post/index.html"),
            "../../docs/guide/"
        );
        // Shared prefix is not collapsed past the point of divergence
        assert_eq!(
            relative_from_file("/blog/posts/a.png", "blog/post/index.html"),
            "../posts/a.png"
        );
    }

    #[test]
    fn test_from_file_self() {
        assert_eq!(relative_from_file("index.html", "index.html"), "");
        assert_eq!(relative_from_file("/blog/", "blog/index.html"), "");
        assert_eq!(relative_from_file("", "blog/index.html"), "");
    }

    #[test]
    fn test_from_file_keeps_trailing_slash() {
        assert_eq!(relative_from_file("blog/", "index.html"), "blog/");
        assert_eq!(relative_from_file("/", "blog/index.html"), "../");
    }

    #[test]
    fn test_from_file_clamps_at_root() {
        assert_eq!(relative_from_file("../../x.png", "index.html"), "x.png");
    }

    #[test]
    fn test_from_root() {
        assert_eq!(
            relative_from_root("image.png", "blog/index.html"),
            "blog/image.png"
        );
        assert_eq!(
            relative_from_root("../image.png", "blog/index.html"),
            "image.png"
        );
        assert_eq!(relative_from_root("/a/./b/../c.png", "x/index.html"), "a/c.png");
        assert_eq!(relative_from_root("/", "blog/index.html"), "");
        assert_eq!(relative_from_root("/blog/", "index.html"), "blog/");
    }

    #[test]
    fn test_anchor_with_leading_slash() {
        assert_eq!(
            relative_from_file("/image.png", "/blog/index.html"),
            "../image.png"
        );
        assert_eq!(relative_from_root("a.png", "/blog/index.html"), "blog/a.png");
    }
}
