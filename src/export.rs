//! Static export of the whole site into a directory.
//!
//! Produces the same pages the server answers with, laid out so any static
//! file host serves them under the same URLs.

use std::path::{Path, PathBuf};

use askama::Template;

use crate::config::Settings;
use crate::content::ServiceCatalog;
use crate::error::{Result, SiteError};
use crate::page;
use crate::server::template_structs::{
    robots_txt, HomeTemplate, NotFoundTemplate, ServiceTemplate, SitemapTemplate,
};
use crate::server::{CSS, JS, MEDIA_PREFIX};

/// What an export wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// HTML pages written, including `404.html`.
    pub pages: usize,
    /// Media files copied from the media directory.
    pub media_files: usize,
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SiteError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Copy a directory tree, returning the number of files copied.
/// The directory `skip` (canonical) is left out, so an output directory
/// inside the tree is not copied into itself.
fn copy_tree(from: &Path, to: &Path, skip: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(from).map_err(|source| SiteError::Read {
        path: from.to_path_buf(),
        source,
    })?;

    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|source| SiteError::Read {
            path: from.to_path_buf(),
            source,
        })?;
        let src = entry.path();
        let dest = to.join(entry.file_name());
        if src.is_dir() {
            if src.canonicalize().is_ok_and(|p| p == skip) {
                tracing::debug!("Skipping output directory {}", src.display());
                continue;
            }
            copied += copy_tree(&src, &dest, skip)?;
        } else {
            let bytes = std::fs::read(&src).map_err(|source| SiteError::Read {
                path: src.clone(),
                source,
            })?;
            write_file(&dest, &bytes)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render every page and asset into `out`.
pub fn export_site(
    settings: &Settings,
    catalog: &ServiceCatalog,
    out: &Path,
) -> Result<ExportSummary> {
    std::fs::create_dir_all(out).map_err(|source| SiteError::Write {
        path: out.to_path_buf(),
        source,
    })?;
    let canonical_out = out.canonicalize().map_err(|source| SiteError::Read {
        path: out.to_path_buf(),
        source,
    })?;
    if settings
        .media_dir
        .canonicalize()
        .is_ok_and(|media| media == canonical_out)
    {
        return Err(SiteError::InvalidContent(format!(
            "output directory {} is the media directory",
            out.display()
        )));
    }

    let mut summary = ExportSummary::default();

    let home = HomeTemplate::new(settings, catalog)?.render()?;
    write_file(&out.join("index.html"), home.as_bytes())?;
    summary.pages += 1;

    for key in page::static_params(catalog) {
        let composed = page::compose(catalog, &key)?;
        let html = ServiceTemplate::new(settings, catalog, &composed)?.render()?;
        let path: PathBuf = out.join("services").join(&key).join("index.html");
        write_file(&path, html.as_bytes())?;
        summary.pages += 1;
    }

    let not_found = NotFoundTemplate::new(settings, catalog).render()?;
    write_file(&out.join("404.html"), not_found.as_bytes())?;
    summary.pages += 1;

    write_file(&out.join("static").join("style.css"), CSS.as_bytes())?;
    write_file(&out.join("static").join("site.js"), JS.as_bytes())?;
    write_file(&out.join("robots.txt"), robots_txt(settings).as_bytes())?;
    let sitemap = SitemapTemplate::new(settings, catalog).render()?;
    write_file(&out.join("sitemap.xml"), sitemap.as_bytes())?;

    if settings.media_dir.is_dir() {
        let media_out = out.join(MEDIA_PREFIX.trim_start_matches('/'));
        summary.media_files = copy_tree(&settings.media_dir, &media_out, &canonical_out)?;
    } else {
        tracing::warn!(
            "Media directory {} not found, exporting pages only",
            settings.media_dir.display()
        );
    }

    tracing::info!(
        pages = summary.pages,
        media_files = summary.media_files,
        "Exported site to {}",
        out.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_every_page() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            media_dir: dir.path().join("no-media"),
            ..Default::default()
        };
        let catalog = ServiceCatalog::builtin();
        let out = dir.path().join("site");

        let summary = export_site(&settings, &catalog, &out).unwrap();

        assert_eq!(summary.pages, catalog.len() + 2);
        assert_eq!(summary.media_files, 0);
        assert!(out.join("index.html").is_file());
        assert!(out.join("404.html").is_file());
        for key in catalog.keys() {
            assert!(out.join("services").join(key).join("index.html").is_file());
        }
        for asset in ["static/style.css", "static/site.js", "robots.txt", "sitemap.xml"] {
            assert!(out.join(asset).is_file(), "missing {}", asset);
        }
    }

    #[test]
    fn test_export_copies_media() {
        let dir = tempdir().unwrap();
        let media_dir = dir.path().join("public");
        std::fs::create_dir_all(media_dir.join("services/gallery")).unwrap();
        std::fs::write(media_dir.join("background.mp4"), b"video").unwrap();
        std::fs::write(media_dir.join("services/gallery/a.jpg"), b"a").unwrap();

        let settings = Settings {
            media_dir,
            ..Default::default()
        };
        let out = dir.path().join("site");
        let summary = export_site(&settings, &ServiceCatalog::builtin(), &out).unwrap();

        assert_eq!(summary.media_files, 2);
        assert_eq!(
            std::fs::read(out.join("media/services/gallery/a.jpg")).unwrap(),
            b"a"
        );
    }

    #[test]
    fn test_export_inside_media_dir_skips_itself() {
        let dir = tempdir().unwrap();
        let media_dir = dir.path().join("public");
        std::fs::create_dir_all(&media_dir).unwrap();
        std::fs::write(media_dir.join("a.jpg"), b"a").unwrap();

        let settings = Settings {
            media_dir: media_dir.clone(),
            ..Default::default()
        };
        let out = media_dir.join("dist");
        let summary = export_site(&settings, &ServiceCatalog::builtin(), &out).unwrap();

        assert_eq!(summary.media_files, 1);
        assert!(out.join("media/a.jpg").is_file());
        assert!(!out.join("media/dist").exists());
    }

    #[test]
    fn test_export_into_media_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            media_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = export_site(&settings, &ServiceCatalog::builtin(), dir.path());
        assert!(matches!(result, Err(SiteError::InvalidContent(_))));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_export_not_found_page() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            media_dir: dir.path().join("no-media"),
            ..Default::default()
        };
        export_site(&settings, &ServiceCatalog::builtin(), dir.path()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("404.html")).unwrap();
        assert!(html.contains("Service Not Found"));
    }
}
