//! SQL text intelligence: scanning, formatting, highlighting, linting,
//! structural analysis and completion over in-progress query text.
//!
//! Every analysis is a pure function of the source text (and, for completion,
//! a cursor). Malformed input never fails; it degrades to best-effort tokens
//! and diagnostics.
pub mod sql;

reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(cursor);
reexport!(formatter);
reexport!(highlighter);
reexport!(linter);
reexport!(analyzer);
reexport!(autocomplete);
reexport!(templates);

pub use sql::prelude::*;

#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
