use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    ConfigParse,
    DateParse,
    ZoneParse,
    AdjustorParse,
    IOError(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<chrono::ParseError> for Error {
    fn from(parse_error: chrono::ParseError) -> Error {
        Error::new(
            ErrorKind::DateParse,
            &format!("Could not parse timestamp: {}", parse_error),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl<E: fmt::Debug> From<nom::Err<E>> for Error {
    fn from(error: nom::Err<E>) -> Self {
        Error::new(
            ErrorKind::AdjustorParse,
            &format!("Error while parsing: {}", error),
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigParse => write!(f, "invalid configuration"),
            ErrorKind::DateParse => write!(f, "invalid date format"),
            ErrorKind::ZoneParse => write!(f, "unknown timezone"),
            ErrorKind::AdjustorParse => write!(f, "invalid adjustor"),
            ErrorKind::IOError(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind, msg),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::IOError(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_message() {
        let err = Error::from(ErrorKind::ZoneParse);
        assert_eq!(err.to_string(), "unknown timezone");

        let err = err.with_msg("Mars/Olympus_Mons");
        assert_eq!(err.to_string(), "unknown timezone: Mars/Olympus_Mons");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert!(matches!(err.kind, ErrorKind::IOError(_)));
        assert!(error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn chrono_errors_become_date_errors() {
        let parse_error = chrono::NaiveDate::parse_from_str("2015-13-01", "%Y-%m-%d").unwrap_err();
        let err = Error::from(parse_error);

        assert!(matches!(err.kind, ErrorKind::DateParse));
    }

    #[test]
    fn nom_errors_become_adjustor_errors() {
        let result: nom::IResult<&str, &str> = nom::bytes::complete::tag("next:")("prev:mon");
        let err = Error::from(result.unwrap_err());

        assert!(matches!(err.kind, ErrorKind::AdjustorParse));
        assert!(err.to_string().starts_with("invalid adjustor: Error while parsing"));
    }
}
