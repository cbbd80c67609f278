// Implements the `Error` wrapper around a module specific `ErrorKind`.
// The kind enum needs an `Io(std::io::Error)` variant, `Display` has to be
// implemented separately for each error type.
macro_rules! impl_error {
    ($ErrorKind:ident) => {
        pub type Result<T> = std::result::Result<T, Error>;

        /// Error type, wrapping a boxed [`ErrorKind`](ErrorKind).
        #[derive(Debug)]
        pub struct Error {
            kind: Box<$ErrorKind>,
        }

        impl Error {
            #[inline]
            pub fn new(kind: $ErrorKind) -> Self {
                Error {
                    kind: Box::new(kind),
                }
            }

            /// Returns a reference to the [`ErrorKind`](ErrorKind)
            /// associated with the error.
            #[inline]
            pub fn kind(&self) -> &$ErrorKind {
                &self.kind
            }

            /// Returns the [`ErrorKind`](ErrorKind) associated with
            /// the error, thereby consuming the error.
            #[inline]
            pub fn into_kind(self) -> $ErrorKind {
                *self.kind
            }
        }

        impl From<$ErrorKind> for Error {
            fn from(kind: $ErrorKind) -> Error {
                Error::new(kind)
            }
        }

        impl From<std::io::Error> for Error {
            fn from(e: std::io::Error) -> Error {
                Error::new($ErrorKind::Io(e))
            }
        }

        impl From<Error> for std::io::Error {
            fn from(err: Error) -> std::io::Error {
                match err.into_kind() {
                    $ErrorKind::Io(e) => e,
                    kind => std::io::Error::new(std::io::ErrorKind::Other, Error::new(kind)),
                }
            }
        }

        impl std::error::Error for Error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self.kind() {
                    $ErrorKind::Io(ref err) => Some(err),
                    _ => None,
                }
            }
        }
    };
}
