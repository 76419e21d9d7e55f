/// Macro to return early with a generic error
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::Generic(format!($($arg)*)))
    };
}

/// Return early with an unsupported-construct error naming the construct
#[macro_export]
macro_rules! bail_unsupported {
    ($construct:expr) => {
        return Err($crate::error::Error::unsupported($construct, None))
    };
    ($construct:expr, $span:expr) => {
        return Err($crate::error::Error::unsupported($construct, $span))
    };
}

/// Return early with a shape error
#[macro_export]
macro_rules! bail_shape {
    ($construct:expr, $reason:expr) => {
        return Err($crate::error::Error::shape($construct, $reason, None))
    };
    ($construct:expr, $reason:expr, $span:expr) => {
        return Err($crate::error::Error::shape($construct, $reason, $span))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

/// Log a debug message
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

/// Log an info message
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Log an error message
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}

/// Log a trace message
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}
