use std::fmt;

macro_rules! define_errors {
    (
        $(wrap $variant:ident($ty:ty) => $label:expr),*;
        $(msg $msg_variant:ident => $msg_label:expr),*
        $(;)?
    ) => {
        #[derive(Debug)]
        pub enum SplitError {
            $($variant($ty),)*
            $($msg_variant(String),)*
        }

        impl fmt::Display for SplitError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(SplitError::$variant(err) => write!(f, "{}: {}", $label, err),)*
                    $(SplitError::$msg_variant(msg) => write!(f, "{}: {}", $msg_label, msg),)*
                }
            }
        }

        $(impl From<$ty> for SplitError {
            fn from(err: $ty) -> Self {
                SplitError::$variant(err)
            }
        })*
    };
}

define_errors! {
    wrap Io(std::io::Error)    => "Io error",
    wrap Toml(toml::de::Error) => "Toml error";
    msg Config           => "Config error",
    msg Logger           => "Logger error",
    msg LinkTagMissing   => "Link tag not found",
    msg HeadCloseMissing => "</head> tag not found"
}

impl std::error::Error for SplitError {}

pub type SplitResult<T> = std::result::Result<T, SplitError>;
