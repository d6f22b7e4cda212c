//! Data model for extracted declarations — format-agnostic.

use serde::Serialize;

/// Attribute token marking a zero-copy account.
pub const ZERO_COPY_MARKER: &str = "account(zero_copy)";

/// Attribute token marking any account structure.
pub const ACCOUNT_MARKER: &str = "account";

/// A `pub struct` recovered from source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructDoc {
    pub name: String,
    /// Cleaned doc comment, empty when undocumented
    pub doc: String,
    pub fields: Vec<FieldDoc>,
    /// Raw contents of each `#[...]` marker
    pub attributes: Vec<String>,
    pub source_file: String,
    /// 1-based
    pub line: usize,
    /// Body of the struct's size-calculation method, if one was found
    pub size_calculation: Option<String>,
}

impl StructDoc {
    pub fn is_zero_copy(&self) -> bool {
        self.attributes.iter().any(|a| a.contains(ZERO_COPY_MARKER))
    }

    pub fn is_account(&self) -> bool {
        self.attributes.iter().any(|a| a.contains(ACCOUNT_MARKER))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub doc: String,
}

/// A function or method signature recovered from source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDoc {
    pub name: String,
    pub doc: String,
    /// `fn <name>(<params>) -> <return>`
    pub signature: String,
    pub source_file: String,
    pub line: usize,
    pub is_public: bool,
    pub params: Vec<ParamDoc>,
    /// `()` when the signature has no return type
    pub return_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// One scanned declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Struct(StructDoc),
    Function(FunctionDoc),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Struct(s) => &s.name,
            Declaration::Function(f) => &f.name,
        }
    }

    pub fn source_file(&self) -> &str {
        match self {
            Declaration::Struct(s) => &s.source_file,
            Declaration::Function(f) => &f.source_file,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Declaration::Struct(s) => s.line,
            Declaration::Function(f) => f.line,
        }
    }

    pub fn doc(&self) -> &str {
        match self {
            Declaration::Struct(s) => &s.doc,
            Declaration::Function(f) => &f.doc,
        }
    }
}

/// Read-only view over everything extracted in a run.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub structs: &'a [StructDoc],
    pub functions: &'a [FunctionDoc],
}

impl<'a> Catalog<'a> {
    pub fn new(structs: &'a [StructDoc], functions: &'a [FunctionDoc]) -> Self {
        Self { structs, functions }
    }

    pub fn zero_copy_structs(&self) -> Vec<&'a StructDoc> {
        self.structs.iter().filter(|s| s.is_zero_copy()).collect()
    }

    pub fn public_functions(&self) -> Vec<&'a FunctionDoc> {
        self.functions.iter().filter(|f| f.is_public).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(attrs: &[&str]) -> StructDoc {
        StructDoc {
            name: "Reserve".to_string(),
            doc: String::new(),
            fields: vec![],
            attributes: attrs.iter().map(|a| a.to_string()).collect(),
            source_file: "models/reserve.rs".to_string(),
            line: 1,
            size_calculation: None,
        }
    }

    #[test]
    fn zero_copy_marker_detected() {
        assert!(account(&["account(zero_copy)"]).is_zero_copy());
        assert!(account(&["derive(Debug)", "account(zero_copy)"]).is_zero_copy());
        assert!(!account(&["account"]).is_zero_copy());
    }

    #[test]
    fn account_marker_is_substring() {
        assert!(account(&["account"]).is_account());
        assert!(account(&["account(zero_copy)"]).is_account());
        assert!(!account(&["derive(Accounts)"]).is_account());
    }

    #[test]
    fn declaration_accessors() {
        let decl = Declaration::Struct(account(&[]));
        assert_eq!(decl.name(), "Reserve");
        assert_eq!(decl.source_file(), "models/reserve.rs");
        assert_eq!(decl.line(), 1);
        assert_eq!(decl.doc(), "");
    }
}
