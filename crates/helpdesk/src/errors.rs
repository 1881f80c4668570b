//! Exit codes for the helpdesk binary

use helpdesk_shared::HelpdeskError;

/// Exit code for success (exit command or end of input)
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the console cannot be read or written (EX_IOERR)
pub const EXIT_IO_ERROR: i32 = 74;

/// Exit code when the built-in catalog is defective (EX_CONFIG)
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map a top-level error to the process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<HelpdeskError>()
        .map(HelpdeskError::code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_config_errors() {
        let err = anyhow::Error::from(HelpdeskError::Catalog("no rules".into()));
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_code_survives_context() {
        let res: Result<(), HelpdeskError> = Err(HelpdeskError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        )));
        let err = res.context("reading input").unwrap_err();
        assert_eq!(exit_code(&err), EXIT_IO_ERROR);
    }

    #[test]
    fn test_pattern_errors() {
        let source = helpdesk_shared::Rule::new("Power", ["(open"], "r").unwrap_err();
        let err = anyhow::Error::from(source).context("built-in catalog is invalid");
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), EXIT_GENERAL_ERROR);
    }
}
