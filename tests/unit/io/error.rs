//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use wordtile::WordTileError;
    use wordtile::io::error::{invalid_parameter, validate_map_dimension};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = WordTileError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be between 4 and 500");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains('0'));
        assert!(message.contains("must be between 4 and 500"));
        assert!(error.source().is_none());
    }

    // Tests history exhaustion messages
    // Verified by swapping undo and redo texts
    #[test]
    fn test_history_messages() {
        let undo = WordTileError::HistoryExhausted { action: "undo" };
        let redo = WordTileError::HistoryExhausted { action: "redo" };
        assert_eq!(undo.to_string(), "No more undo steps.");
        assert_eq!(redo.to_string(), "No redo steps available.");
    }

    // Tests empty selection message carries the reason
    // Verified by dropping the reason
    #[test]
    fn test_empty_selection_message() {
        let error = WordTileError::EmptySelection {
            reason: "No cell selected.",
        };
        assert!(error.to_string().contains("No cell selected."));
    }

    // Tests map dimensions are validated inclusively
    // Verified by using an exclusive upper bound
    #[test]
    fn test_validate_map_dimension() {
        assert_eq!(validate_map_dimension("width", 4).ok(), Some(4));
        assert_eq!(validate_map_dimension("width", 500).ok(), Some(500));
        assert!(matches!(
            validate_map_dimension("height", 3),
            Err(WordTileError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
        assert!(validate_map_dimension("height", 501).is_err());
        assert!(validate_map_dimension("height", 0).is_err());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = WordTileError::ImageExport {
            path: PathBuf::from("/tmp/out.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/out.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
