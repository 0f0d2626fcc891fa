use std::fmt::{Debug, Display};

use strum::{IntoStaticStr, VariantArray};

/// Which stage of the pipeline failed.
#[derive(IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The input could not be opened, read or decoded.
    Decode,
    /// No output format could be chosen, the encoder rejected the image,
    /// or the destination could not be written.
    Encode,
    /// The command line did not name exactly one input and one output.
    Usage,
}

pub struct FlipError {
    kind: ErrorKind,
    message: String,
}

impl FlipError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FlipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for FlipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = self.kind.into();
        f.debug_tuple("FlipError")
            .field(&kind)
            .field(&self.message)
            .finish()
    }
}

impl std::error::Error for FlipError {}

#[macro_export]
macro_rules! fl_err {
    ($kind:expr, $($arg:tt)+) => {
        $crate::error::FlipError::new(
            $kind,
            format!(
                "fliph: {} @ {}:{}:{}",
                format_args!($($arg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! fl_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::fl_err!($kind, "{}", err));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails_with(kind: ErrorKind) -> Result<(), FlipError> {
        fl_try!(kind, "x".parse::<u32>());
        Ok(())
    }

    #[test]
    fn message_carries_prefix_and_location() {
        let err = fl_err!(ErrorKind::Decode, "unable to open image '{}'", "a.png");
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.message().starts_with("fliph: unable to open image 'a.png' @ "));
        assert!(err.message().contains(file!()));
    }

    #[test]
    fn try_keeps_the_requested_kind() {
        for kind in ErrorKind::VARIANTS {
            let err = fails_with(*kind).unwrap_err();
            assert_eq!(err.kind(), *kind);
            assert!(err.to_string().contains("invalid digit"));
        }
    }

    #[test]
    fn debug_names_the_kind() {
        let err = FlipError::new(ErrorKind::Encode, "boom".to_owned());
        assert_eq!(format!("{err:?}"), r#"FlipError("encode", "boom")"#);
    }
}
