use super::Error;

/// Error raised by the driver behind a connection.
#[derive(Debug)]
pub(super) struct DriverError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver error.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            inner: Box::new(err),
        }))
    }

    /// Creates the error raised when a connection capability is used after the
    /// connection was closed.
    pub fn connection_closed() -> Error {
        Error::from(super::ErrorKind::ConnectionClosed)
    }

    /// Returns `true` if this error is a driver error.
    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }

    /// Returns `true` if this error reports a closed connection.
    pub fn is_connection_closed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionClosed)
    }

    /// Returns `true` for any error raised at the connection boundary: driver
    /// failures, unsupported features and closed connections.
    pub fn is_driver_capability(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Driver(_)
                | super::ErrorKind::UnsupportedFeature(_)
                | super::ErrorKind::ConnectionClosed
        )
    }
}
