//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use linegrain::GenerationError;
    use linegrain::io::error::{file_system_error, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = file_system_error("/tmp/out.svg", "write", io_error);

        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "File system error during write on '/tmp/out.svg': denied"
        );
    }

    // Tests invalid parameter formatting
    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("width", &0, &"must be positive");

        assert!(error.source().is_none());
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'width' = '0': must be positive"
        );
    }

    // Tests stdout failures name the stream rather than a file
    #[test]
    fn test_stdout_error_names_stream() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error = file_system_error("<stdout>", "write", io_error);

        assert!(matches!(
            &error,
            GenerationError::FileSystem {
                operation: "write",
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "File system error during write on '<stdout>': closed"
        );
    }
}
