use anyhow::Result;
use mondesa_site::domain::model::SiteInfo;
use mondesa_site::{LocalStorage, Site, SiteExporter};
use tempfile::TempDir;

#[tokio::test]
async fn test_export_writes_every_page() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let site = Site::new(SiteInfo::default())?;

    let exporter = SiteExporter::new(&site, LocalStorage::new(temp_dir.path()));
    let written = exporter.export(2025).await?;

    let expected = [
        "index.html",
        "about/index.html",
        "mondesa/index.html",
        "projects/index.html",
        "contact/index.html",
        "projects/landslide-monitoring/index.html",
        "projects/enemeter/index.html",
        "projects/sensornodelib/index.html",
        "404.html",
    ];
    assert_eq!(written.len(), expected.len());
    for file in expected {
        assert!(written.iter().any(|w| w == file), "missing {file}");
        assert!(temp_dir.path().join(file).exists(), "not on disk: {file}");
    }

    let detail = tokio::fs::read_to_string(temp_dir.path().join("projects/enemeter/index.html")).await?;
    assert!(detail.contains("<title>EneMeter | MonDesa</title>"));
    assert!(detail.contains("© 2025 MonDesa. All rights reserved."));

    let missing = tokio::fs::read_to_string(temp_dir.path().join("404.html")).await?;
    assert!(missing.contains("data-page=\"not_found\""));

    Ok(())
}

#[tokio::test]
async fn test_export_uses_configured_site_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let info = SiteInfo {
        name: "MonDesa Labs".to_string(),
        ..SiteInfo::default()
    };
    let site = Site::new(info)?;

    SiteExporter::new(&site, LocalStorage::new(temp_dir.path()))
        .export(2030)
        .await?;

    let about = tokio::fs::read_to_string(temp_dir.path().join("about/index.html")).await?;
    assert!(about.contains("<title>About Me | MonDesa Labs</title>"));
    assert!(about.contains("© 2030 MonDesa Labs."));
    Ok(())
}
