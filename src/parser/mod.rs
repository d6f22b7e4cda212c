//! Scanner module — turns raw source text into declarations.

pub mod rust;

use crate::model::Declaration;

/// Strategy for recovering declarations from the text of one source file.
///
/// Implementations never fail: text that does not look like a declaration is
/// skipped. Structs come before functions in the yielded sequence, each kind
/// in source order.
pub trait Scanner {
    fn scan<'a>(
        &'a self,
        input: &'a str,
        source_file: &'a str,
    ) -> Box<dyn Iterator<Item = Declaration> + 'a>;
}
