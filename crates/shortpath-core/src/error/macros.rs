//! Error macros for shortpath

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::ShortpathError::UsageError($msg.to_string()))
    };
}

/// Macro for returning a missing-node error
#[macro_export]
macro_rules! bail_not_found {
    ($node:expr) => {
        return Err($crate::error::ShortpathError::node_not_found($node))
    };
}
