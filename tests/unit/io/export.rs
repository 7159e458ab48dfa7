//! Tests for writing markup to disk

#[cfg(test)]
mod tests {
    use linegrain::GenerationError;
    use linegrain::io::export::{export_svg, numbered_output_path};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    // Tests markup is written byte for byte into created directories
    #[test]
    fn test_export_svg_creates_parents() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("temp dir: {e}"));
        let path = dir.path().join("nested/deeper/art.svg");
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n";

        assert!(export_svg(svg, &path).is_ok());
        assert_eq!(fs::read_to_string(&path).ok().as_deref(), Some(svg));
    }

    // Tests a write into a path blocked by a file reports a file system error
    #[test]
    fn test_export_svg_reports_failure() {
        let dir = TempDir::new().unwrap_or_else(|e| unreachable!("temp dir: {e}"));
        let blocker = dir.path().join("blocker");
        assert!(fs::write(&blocker, "x").is_ok());

        let result = export_svg("<svg/>", &blocker.join("art.svg"));
        assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
    }

    // Tests single documents keep the requested path
    #[test]
    fn test_numbered_output_path_single() {
        let base = Path::new("out/generated-art.svg");
        assert_eq!(numbered_output_path(base, 0, 1), PathBuf::from("out/generated-art.svg"));
    }

    // Tests batches get zero padded indices
    #[test]
    fn test_numbered_output_path_batch() {
        let base = Path::new("out/generated-art.svg");
        assert_eq!(
            numbered_output_path(base, 2, 5),
            PathBuf::from("out/generated-art_002.svg")
        );
        assert_eq!(
            numbered_output_path(Path::new("art"), 0, 2),
            PathBuf::from("art_000.svg")
        );
    }
}
