//! Instrumentation for findit's preparation and clustering stages.
//!
//! `enter_stage!(guard, name, fields..)` binds `guard` to an entered
//! info-level span for the rest of the enclosing block.
//! `report!` records the outcome of a stage at info level; `progress!`
//! records per-restart and per-iteration k-means detail at debug level.
//! Without the `tracing` feature all three expand to nothing observable: the
//! stage binding is omitted and event fields are evaluated and dropped.

#[cfg(feature = "tracing")]
macro_rules! enter_stage {
    ($guard:ident, $name:expr $(, $($field:tt)*)?) => {
        let $guard = tracing::info_span!($name $(, $($field)*)?).entered();
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! enter_stage {
    ($guard:ident, $name:expr $(, $($field:tt)*)?) => {};
}

#[cfg(feature = "tracing")]
macro_rules! report {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(feature = "tracing")]
macro_rules! progress {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! report {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! progress {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use enter_stage;
pub(crate) use progress;
pub(crate) use report;
