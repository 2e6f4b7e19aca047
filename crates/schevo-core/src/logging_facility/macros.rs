//! Operation logging macros.
//!
//! Every boundary operation and pipeline stage brackets its work with a
//! `start` event and either an `end` or an `end_error` event. All three carry
//! `component` (the calling module) and `op`; any extra `key = value` pairs
//! are passed through to `tracing` unchanged.

/// Log the start of an operation.
///
/// ```
/// # use schevo_core::log_op_start;
/// log_op_start!("diff_schemas");
/// log_op_start!("diff_schemas", old_schema_count = 2, new_schema_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// Log the successful end of an operation. `duration_ms` is mandatory.
///
/// ```
/// # use schevo_core::log_op_end;
/// log_op_end!("resolve_impact", duration_ms = 3, affected_count = 5);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Log the failed end of an operation.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// the event carries its kind and stable code.
///
/// ```
/// # use schevo_core::log_op_error;
/// # use schevo_core::errors::SchevoError;
/// let err = SchevoError::MissingSchemas { key: "oldSchemas".to_string() };
/// log_op_error!("parse_analysis_document", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)+)?
        )
    }};
}
