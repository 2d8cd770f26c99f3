// Command line argument module
// The only operator input is an optional positional port

use std::fmt;

/// Errors produced while turning CLI input into a `Config`
#[derive(Debug)]
pub enum ArgsError {
    /// The positional argument is not an integer in 0..=65535
    InvalidPort(String),
    /// The layered configuration could not be built or deserialized
    Config(config::ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(arg) => write!(f, "invalid port argument '{arg}'"),
            Self::Config(e) => write!(f, "configuration error: {e}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPort(_) => None,
            Self::Config(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ArgsError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Extract the port override from `argv`.
///
/// `args[0]` is the program name. Anything after the first positional
/// argument is ignored.
pub fn parse_port_arg<S: AsRef<str>>(args: &[S]) -> Result<Option<u16>, ArgsError> {
    let Some(raw) = args.get(1) else {
        return Ok(None);
    };
    let raw: &str = raw.as_ref();

    raw.trim()
        .parse::<u16>()
        .map(Some)
        .map_err(|_| ArgsError::InvalidPort(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument() {
        assert_eq!(parse_port_arg(&["face-api-mock"]).unwrap(), None);
    }

    #[test]
    fn test_numeric_argument() {
        assert_eq!(
            parse_port_arg(&["face-api-mock", "9000"]).unwrap(),
            Some(9000)
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(
            parse_port_arg(&["face-api-mock", "8081", "verbose"]).unwrap(),
            Some(8081)
        );
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = parse_port_arg(&["face-api-mock", "abc"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidPort(ref a) if a == "abc"));
        assert_eq!(err.to_string(), "invalid port argument 'abc'");
    }

    #[test]
    fn test_out_of_range_argument() {
        assert!(parse_port_arg(&["face-api-mock", "70000"]).is_err());
        assert!(parse_port_arg(&["face-api-mock", "-1"]).is_err());
    }
}
