//! Error macros for pathstep

/// Macro for returning invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathstepError::invalid_value($context, $value))
    };
}

/// Macro for returning not found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathstepError::not_found($context, $value))
    };
}
