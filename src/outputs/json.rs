//! JSON output for crawled articles.
//!
//! # Output Structure
//!
//! ```text
//! results_dir/
//! └── articles.json
//! ```
//!
//! The file holds a JSON array of article objects, indented by four spaces,
//! with non-ASCII text (Cyrillic headlines) written as-is rather than escaped.

use crate::models::ArticleRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// File name written inside the results directory.
pub const ARTICLES_FILE: &str = "articles.json";

/// Serialize `articles` with a four-space indent.
pub fn articles_to_json(articles: &[ArticleRecord]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    articles.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write `articles` to `{results_dir}/articles.json`, creating the directory
/// if it does not exist.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(results_dir = %results_dir.display(), count = articles.len()))]
pub async fn write_articles(
    articles: &[ArticleRecord],
    results_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = articles_to_json(articles)?;

    info!("Ensuring results directory exists");
    if let Err(e) = fs::create_dir_all(results_dir).await {
        error!(error = %e, "Failed to create results dir");
        return Err(e.into());
    }

    let output_path = results_dir.join(ARTICLES_FILE);
    info!(path = %output_path.display(), "Writing JSON");
    fs::write(&output_path, json).await?;
    info!(path = %output_path.display(), "Wrote articles JSON");

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            content: "Текст новости.".to_string(),
            category: "Мир".to_string(),
            created_date: "Unknown".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_json_keeps_cyrillic_and_four_space_indent() {
        let json = articles_to_json(&[record("Новость", "https://lenta.ru/news/1")]).unwrap();
        let text = String::from_utf8(json).unwrap();

        assert!(text.contains("Новость"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n    {\n        \"title\": \"Новость\""));
    }

    #[test]
    fn test_empty_list_serializes_as_empty_array() {
        let json = articles_to_json(&[]).unwrap();
        assert_eq!(json, b"[]");
    }

    #[tokio::test]
    async fn test_write_articles_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let results_dir = tmp.path().join("nested").join("results");
        let articles = vec![
            record("Первая", "https://lenta.ru/news/1"),
            record("Вторая", "https://lenta.ru/news/2"),
        ];

        let path = write_articles(&articles, &results_dir).await.unwrap();
        assert_eq!(path, results_dir.join(ARTICLES_FILE));

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ArticleRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, articles);
    }

    #[tokio::test]
    async fn test_write_articles_overwrites_previous_run() {
        let tmp = tempfile::tempdir().unwrap();

        write_articles(&[record("Старая", "https://lenta.ru/old")], tmp.path())
            .await
            .unwrap();
        let path = write_articles(&[], tmp.path()).await.unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, "[]");
    }
}
