use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::html::RenderError;
use crate::inline::ParseError;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Failures while generating the site. Parse and render errors keep their own
/// kinds; filesystem errors carry the path they happened on.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no h1 heading found")]
    MissingTitle,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl SiteError {
    fn io(path: &Path, source: io::Error) -> Self {
        SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Extract the document title: the remainder of the first line whose trimmed
/// form starts with `# `.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    markdown
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(SiteError::MissingTitle)
}

/// Fill a page template: parse and render the document, extract its title, and
/// substitute both into the template's placeholder tokens.
pub fn render_page(markdown: &str, template: &str) -> Result<String, SiteError> {
    let html = crate::parse(markdown)?.render()?;
    let title = extract_title(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &html))
}

/// Generate one page from a markdown file, creating parent directories of the
/// destination as needed.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<(), SiteError> {
    log::info!(
        "generating {} -> {}",
        from.display(),
        dest.display()
    );

    let markdown = fs::read_to_string(from).map_err(|e| SiteError::io(from, e))?;
    let page = render_page(&markdown, template)?;

    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir).map_err(|e| SiteError::io(dir, e))?;
    }
    fs::write(dest, page).map_err(|e| SiteError::io(dest, e))
}

/// Walk the content directory and generate a page for every `*.md` file,
/// mirroring the directory layout under `dest_dir` with `.html` extensions.
/// Non-markdown files are skipped.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
) -> Result<(), SiteError> {
    let entries = fs::read_dir(content_dir).map_err(|e| SiteError::io(content_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(content_dir, e))?;
        let from = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if from.is_dir() {
            generate_pages_recursive(&from, template, &dest)?;
        } else if from.extension().is_some_and(|ext| ext == "md") {
            generate_page(&from, template, &dest.with_extension("html"))?;
        } else {
            log::debug!("skipping non-markdown file {}", from.display());
        }
    }

    Ok(())
}

/// Recursively copy a directory tree.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(dest).map_err(|e| SiteError::io(dest, e))?;

    let entries = fs::read_dir(src).map_err(|e| SiteError::io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SiteError::io(src, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(|e| SiteError::io(&from, e))?;
        }
    }

    Ok(())
}

/// Build the whole site: clear the output directory, copy static assets, and
/// generate a page for every content document.
pub fn build_site(
    content_dir: &Path,
    static_dir: &Path,
    output_dir: &Path,
    template_path: &Path,
) -> Result<(), SiteError> {
    if output_dir.exists() {
        log::info!("removing {}", output_dir.display());
        fs::remove_dir_all(output_dir).map_err(|e| SiteError::io(output_dir, e))?;
    }

    if static_dir.exists() {
        copy_dir_recursive(static_dir, output_dir)?;
    }

    let template =
        fs::read_to_string(template_path).map_err(|e| SiteError::io(template_path, e))?;

    generate_pages_recursive(content_dir, &template, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extract_title_basic() {
        assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    }

    #[test]
    fn extract_title_trims_whitespace() {
        assert_eq!(extract_title("#  Hello there  ").unwrap(), "Hello there");
        assert_eq!(extract_title("  # Indented").unwrap(), "Indented");
    }

    #[test]
    fn extract_title_skips_non_h1_lines() {
        let md = "intro text\n## Not an h1\n# The Title\nmore";
        assert_eq!(extract_title(md).unwrap(), "The Title");
    }

    #[test]
    fn extract_title_missing_fails() {
        assert!(matches!(
            extract_title("## Not an h1"),
            Err(SiteError::MissingTitle)
        ));
    }

    #[test]
    fn render_page_substitutes_placeholders() {
        let template = "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>";
        let page = render_page("# Hi\n\nsome text", template).unwrap();
        assert_eq!(
            page,
            "<html><title>Hi</title><body><div><h1>Hi</h1><p>some text</p></div></body></html>"
        );
    }

    #[test]
    fn generate_pages_mirrors_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        let out = tmp.path().join("public");

        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("index.md"), "# Home\n\nwelcome").unwrap();
        fs::write(content.join("blog/post.md"), "# Post\n\nhello").unwrap();
        fs::write(content.join("notes.txt"), "not markdown").unwrap();

        generate_pages_recursive(&content, "{{ Title }}|{{ Content }}", &out).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("index.html")).unwrap(),
            "Home|<div><h1>Home</h1><p>welcome</p></div>"
        );
        assert_eq!(
            fs::read_to_string(out.join("blog/post.html")).unwrap(),
            "Post|<div><h1>Post</h1><p>hello</p></div>"
        );
        assert!(!out.join("notes.txt").exists());
    }

    #[test]
    fn copy_dir_recursive_copies_nested_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("static");
        let dest = tmp.path().join("public");

        fs::create_dir_all(src.join("css")).unwrap();
        fs::write(src.join("css/site.css"), "body {}").unwrap();
        fs::write(src.join("logo.svg"), "<svg/>").unwrap();

        copy_dir_recursive(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("css/site.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dest.join("logo.svg")).unwrap(), "<svg/>");
    }
}
