//! Loading analysis configuration and input texts from disk.

use crate::error::Result;
use savanna_analyzer::AnalysisConfig;
use savanna_domain::HistoricalText;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load the analysis config from a TOML file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    debug!("Loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    Ok(AnalysisConfig::from_toml(&contents)?)
}

/// Read a JSON array of historical texts.
///
/// Texts with a blank id are skipped with a warning; the rest of the batch loads.
pub fn load_texts(path: &Path) -> Result<Vec<HistoricalText>> {
    let contents = fs::read_to_string(path)?;
    let texts: Vec<HistoricalText> = serde_json::from_str(&contents)?;

    let texts: Vec<HistoricalText> = texts
        .into_iter()
        .filter(|text| {
            let keep = !text.id.trim().is_empty();
            if !keep {
                warn!(
                    "Skipping text with empty id (content {:?})",
                    truncate(&text.content, 40)
                );
            }
            keep
        })
        .collect();

    debug!("Loaded {} texts from {}", texts.len(), path.display());
    Ok(texts)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert!(config.include_temporal_analysis);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "include_comparative_analysis = true").unwrap();
        writeln!(file, "confidence_threshold = 0.25").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.include_comparative_analysis);
        assert_eq!(config.confidence_threshold, 0.25);
    }

    #[test]
    fn test_load_texts() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a", "content": "acacia", "timestamp": 1850, "author": "Livingstone"}}]"#
        )
        .unwrap();

        let texts = load_texts(file.path()).unwrap();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].author.as_deref(), Some("Livingstone"));
    }

    #[test]
    fn test_load_texts_skips_blank_id_and_keeps_the_rest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "ok", "content": "acacia zebra", "timestamp": 1850}},
                {{"id": " ", "content": "dense canopy", "timestamp": 1900}},
                {{"id": "later", "content": "forest trees", "timestamp": 1950}}]"#
        )
        .unwrap();

        let texts = load_texts(file.path()).unwrap();
        let ids: Vec<&str> = texts.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "later"]);
    }

    #[test]
    fn test_load_texts_missing_file() {
        let result = load_texts(Path::new("/nonexistent/texts.json"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
