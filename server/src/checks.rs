use std::{
    fs::{exists, metadata},
    path::{Path, PathBuf},
};

use content::{ASSET_PATH, CERTIFICATE_PATH, Portfolio};

use crate::config::ServerConfig;

pub fn dir_exists(dir: &Path) -> anyhow::Result<()> {
    if !exists(dir)? {
        return Err(anyhow::Error::msg(format!("{dir:?} does not exist")));
    }

    if !metadata(dir)?.is_dir() {
        return Err(anyhow::Error::msg(format!("{dir:?} is not a directory")));
    }

    Ok(())
}

// the single-page fallback serves index.html for every unknown path, so a
// missing index would turn every request into a 404
pub fn doc_root_has_index(config: &ServerConfig) -> anyhow::Result<()> {
    dir_exists(&config.http.doc_root)?;

    let index = config.http.doc_root.join("index.html");

    if !exists(&index)? {
        return Err(anyhow::Error::msg(format!(
            "doc_root {:?} has no index.html",
            config.http.doc_root
        )));
    }

    Ok(())
}

pub fn all(config: &ServerConfig) -> anyhow::Result<()> {
    doc_root_has_index(config)?;
    dir_exists(&config.http.asset_root)?;
    dir_exists(&config.http.certificate_root)?;

    Ok(())
}

// map a catalog url like /assets/resume.pdf onto the directory that serves it.
// external links are none of our business
fn local_file(config: &ServerConfig, url: &str) -> Option<PathBuf> {
    let path = url.strip_prefix('/')?;
    let (root, rest) = path.split_once('/')?;

    match root {
        ASSET_PATH => Some(config.http.asset_root.join(rest)),
        CERTIFICATE_PATH => Some(config.http.certificate_root.join(rest)),
        _ => None,
    }
}

// every locally-served file the catalog points at that isn't on disk.  these
// are broken links on the page rather than startup failures
pub fn missing_catalog_files(config: &ServerConfig, portfolio: &Portfolio) -> Vec<PathBuf> {
    let urls = [&portfolio.profile.image, &portfolio.profile.resume]
        .into_iter()
        .chain(portfolio.certifications.iter().flat_map(|cert| {
            std::iter::once(&cert.document).chain(cert.logo.as_ref())
        }))
        .chain(
            portfolio
                .projects
                .iter()
                .flat_map(|p| std::iter::once(&p.image).chain(p.document.as_ref())),
        );

    urls.filter_map(|url| local_file(config, url))
        .filter(|path| !matches!(exists(path), Ok(true)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use super::*;
    use crate::config::HttpConfig;

    fn config(root: &Path) -> ServerConfig {
        ServerConfig {
            http: HttpConfig {
                socket: "127.0.0.1:0".into(),
                doc_root: root.join("dist"),
                asset_root: root.join("assets"),
                certificate_root: root.join("certificates"),
            },
        }
    }

    #[test]
    fn complete_layout_passes() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["dist", "assets", "certificates"] {
            create_dir(dir.path().join(sub)).unwrap();
        }
        write(dir.path().join("dist/index.html"), "<html></html>").unwrap();

        all(&config(dir.path())).unwrap();
    }

    #[test]
    fn missing_index_fails() {
        let dir = tempfile::tempdir().unwrap();
        create_dir(dir.path().join("dist")).unwrap();

        let err = doc_root_has_index(&config(dir.path())).unwrap_err();
        assert!(err.to_string().contains("no index.html"));
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("assets");
        write(&file, "").unwrap();

        assert!(dir_exists(&file).is_err());
        assert!(dir_exists(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn catalog_urls_map_to_roots() {
        let config = config(Path::new("/srv"));

        assert_eq!(
            local_file(&config, "/assets/resume.pdf"),
            Some(PathBuf::from("/srv/assets/resume.pdf"))
        );
        assert_eq!(
            local_file(&config, "/certificates/aws.pdf"),
            Some(PathBuf::from("/srv/certificates/aws.pdf"))
        );
        assert_eq!(local_file(&config, "https://example.com/a.png"), None);
        assert_eq!(local_file(&config, "/favicon.ico"), None);
    }

    #[test]
    fn reports_missing_catalog_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        create_dir(&config.http.asset_root).unwrap();
        write(config.http.asset_root.join("resume.pdf"), "").unwrap();

        let portfolio = Portfolio::builtin().unwrap();
        let missing = missing_catalog_files(&config, &portfolio);

        assert!(missing.contains(&config.http.asset_root.join("profile-pic.png")));
        assert!(!missing.contains(&config.http.asset_root.join("resume.pdf")));
        assert!(
            missing.contains(
                &config
                    .http
                    .certificate_root
                    .join("aws-cloud-practitioner.pdf")
            )
        );
    }
}
