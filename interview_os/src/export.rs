//! JSON export of the catalog in the shape the presentation layer consumes.

use std::fs;
use std::path::Path;

use crate::catalog::AppData;
use crate::error::{CatalogError, Result};

/// Serialize the catalog. Content strings are emitted verbatim.
pub fn to_json(data: &AppData, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    Ok(json)
}

/// Serialize the catalog to a file, replacing it if present.
pub fn write_json(data: &AppData, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(data, pretty)?;
    fs::write(path, json).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a catalog previously produced by [`to_json`].
pub fn from_json(json: &str) -> Result<AppData> {
    Ok(serde_json::from_str(json)?)
}

/// Read a catalog file produced by [`write_json`].
pub fn read_json(path: impl AsRef<Path>) -> Result<AppData> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Subtopic, Topic};

    fn sample() -> AppData {
        AppData::from_topics(vec![Topic::new("must-know-terms", "Must know Terms").with_subtopic(
            Subtopic::new(
                "cors",
                "CORS",
                "<p>Uses <code>Access-Control-Allow-Origin</code> & \"quotes\"</p>",
            )
            .with_category(Category::SecurityAndAuthentication),
        )])
    }

    #[test]
    fn test_compact_and_pretty() {
        let compact = to_json(&sample(), false).unwrap();
        let pretty = to_json(&sample(), true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert!(compact.starts_with("{\"topics\":["));
    }

    #[test]
    fn test_content_passes_through() {
        let json = to_json(&sample(), false).unwrap();
        let decoded = from_json(&json).unwrap();
        assert_eq!(
            decoded.subtopic("must-know-terms", "cors").unwrap().content,
            sample().topics()[0].subtopics[0].content
        );
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_data.json");

        write_json(&sample(), &path, true).unwrap();
        let decoded = read_json(&path).unwrap();

        assert_eq!(decoded, sample());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = read_json(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(matches!(
            from_json("{\"sections\": []}"),
            Err(CatalogError::Json(_))
        ));
    }
}
