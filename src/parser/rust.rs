//! Regex-based Rust declaration scanner.
//!
//! Extracts from `.rs` text without a real parser:
//! - `pub struct` items with their `///` docs, `#[...]` attributes and `pub` fields
//! - `fn` items (free functions, methods, trait declarations) with parameters
//! - the body of a zero-argument `-> usize` method in an `impl` for each struct
//!
//! Known limitations: a struct body ends at its first `}`, generic suffixes
//! may not nest `<...>`, and parameter lists may not contain `)`.

use crate::model::*;
use crate::parser::Scanner;
use regex::Regex;
use std::sync::LazyLock;

static RE_STRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(?P<doc>(?:^[ \t]*///[^\n]*\n)*)\s*",
        r"(?P<attrs>(?:#\[[^\n]*\]\s*)*)",
        r"pub\s+struct\s+(?P<name>\w+)\s*",
        r"(?:<[^>]*>)?\s*\{\s*",
        r"(?P<fields>(?s:.*?))\s*\}",
    ))
    .unwrap()
});

static RE_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\[([^\]]+)\]").unwrap());

// Field heads only; the type is cut at the first top-level comma by hand so
// generic arguments like `Account<'info, Reserve>` stay intact.
static RE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?P<doc>(?:^[ \t]*///[^\n]*\n)*)\s*pub\s+(?P<name>\w+)\s*:\s*").unwrap()
});

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(?P<doc>(?:^[ \t]*///[^\n]*\n)*)\s*",
        r"(?:#\[[^\n]*\]\s*)*",
        r"(?P<vis>pub\s+)?",
        r#"(?:(?:const|async|unsafe|extern\s+"[^"]*")\s+)*"#,
        r"\bfn\s+(?P<name>\w+)\s*",
        r"(?:<[^>]*>)?\s*",
        r"\((?P<params>[^)]*)\)\s*",
        r"(?:->\s*(?P<ret>[^{;]+))?\s*",
        r"[{;]",
    ))
    .unwrap()
});

const DOC_LEADERS: &[&str] = &["///", "//!"];

/// The default [`Scanner`]: pattern matching over raw text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexScanner;

impl Scanner for RegexScanner {
    fn scan<'a>(
        &'a self,
        input: &'a str,
        source_file: &'a str,
    ) -> Box<dyn Iterator<Item = Declaration> + 'a> {
        Box::new(
            scan_structs(input, source_file)
                .map(Declaration::Struct)
                .chain(scan_functions(input, source_file).map(Declaration::Function)),
        )
    }
}

/// Lazily scan `input` for `pub struct` declarations.
pub fn scan_structs<'a>(input: &'a str, source_file: &'a str) -> impl Iterator<Item = StructDoc> + 'a {
    RE_STRUCT.captures_iter(input).map(move |caps| {
        let name = caps["name"].to_string();
        let attributes = RE_ATTR
            .captures_iter(&caps["attrs"])
            .map(|a| a[1].trim().to_string())
            .collect();
        let size_calculation = find_size_calculation(input, &name);

        StructDoc {
            doc: clean_doc_comment(&caps["doc"]),
            fields: parse_fields(&caps["fields"]),
            attributes,
            source_file: source_file.to_string(),
            line: line_of(input, caps.get(0).map_or(0, |m| content_start(m.start(), m.as_str()))),
            size_calculation,
            name,
        }
    })
}

/// Lazily scan `input` for function declarations and definitions.
pub fn scan_functions<'a>(
    input: &'a str,
    source_file: &'a str,
) -> impl Iterator<Item = FunctionDoc> + 'a {
    RE_FUNCTION.captures_iter(input).map(move |caps| {
        let name = caps["name"].to_string();
        let raw_params = caps.name("params").map_or("", |m| m.as_str());
        let return_type = caps
            .name("ret")
            .map(|m| m.as_str().trim())
            .filter(|r| !r.is_empty())
            .unwrap_or("()")
            .to_string();

        FunctionDoc {
            doc: clean_doc_comment(&caps["doc"]),
            signature: format!("fn {}({}) -> {}", name, raw_params, return_type),
            source_file: source_file.to_string(),
            line: line_of(input, caps.get(0).map_or(0, |m| content_start(m.start(), m.as_str()))),
            is_public: caps.name("vis").is_some(),
            params: parse_params(raw_params),
            return_type,
            name,
        }
    })
}

/// Strip `///` and `//!` leaders from a doc block.
///
/// Every line is trimmed; lines without a leader are dropped. A block with no
/// leader at all is treated as already clean, which makes the operation
/// idempotent.
pub fn clean_doc_comment(block: &str) -> String {
    let lines: Vec<&str> = block.lines().map(str::trim).collect();

    let cleaned: Vec<&str> = if lines.iter().any(|l| has_doc_leader(l)) {
        lines.iter().copied().filter_map(strip_doc_leader).collect()
    } else {
        lines
    };

    cleaned.join("\n").trim().to_string()
}

fn has_doc_leader(line: &str) -> bool {
    DOC_LEADERS.iter().any(|leader| line.starts_with(leader))
}

fn strip_doc_leader(line: &str) -> Option<&str> {
    let mut rest = line;
    let mut stripped = false;
    while let Some(r) = DOC_LEADERS.iter().find_map(|leader| rest.strip_prefix(leader)) {
        rest = r.trim();
        stripped = true;
    }
    stripped.then_some(rest)
}

/// Extract `pub name: Type` fields from a struct body.
fn parse_fields(body: &str) -> Vec<FieldDoc> {
    RE_FIELD
        .captures_iter(body)
        .filter_map(|caps| {
            let head = caps.get(0)?;
            let rest = &body[head.end()..];
            let end = top_level_chars(rest)
                .find(|&(_, c)| c == ',' || c == '\n')
                .map_or(rest.len(), |(i, _)| i);
            let ty = normalize_type(rest[..end].trim().trim_end_matches(','));
            if ty.is_empty() {
                return None;
            }

            Some(FieldDoc {
                name: caps["name"].to_string(),
                ty,
                doc: clean_doc_comment(&caps["doc"]),
            })
        })
        .collect()
}

/// Split a raw parameter list into `(name, type)` pairs.
///
/// Only top-level commas separate parameters. Pieces without a `:` (receivers
/// like `&mut self`) are skipped.
fn parse_params(raw: &str) -> Vec<ParamDoc> {
    split_top_level(raw)
        .into_iter()
        .filter_map(|piece| {
            let (name, ty) = piece.trim().split_once(':')?;
            let name = name.trim();
            let name = name.strip_prefix("mut ").unwrap_or(name).trim_start();
            let name = name.strip_prefix('&').unwrap_or(name).trim();
            if name.is_empty() {
                return None;
            }
            Some(ParamDoc {
                name: name.to_string(),
                ty: normalize_type(ty.trim()),
            })
        })
        .collect()
}

/// Find the body of a zero-argument `-> usize` method in an `impl` for
/// `struct_name`, either inherent or `impl Trait for Name`.
///
/// The method must appear before any `}` inside the impl block, and its body
/// may not contain braces.
pub fn find_size_calculation(input: &str, struct_name: &str) -> Option<String> {
    let pattern = format!(
        concat!(
            r"\bimpl(?:<[^>]*>)?\s+(?:[\w:]+(?:<[^>]*>)?\s+for\s+)?{name}(?:<[^>]*>)?\s*\{{",
            r"[^}}]*?fn\s+\w+\s*\(\s*\)\s*->\s*usize\s*\{{\s*(?P<body>[^}}]+)\}}",
        ),
        name = regex::escape(struct_name)
    );
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(input)?;
    let body = caps["body"].trim();
    (!body.is_empty()).then(|| body.to_string())
}

/// Characters of `text` that sit outside any `<>`, `()` or `[]` nesting.
fn top_level_chars(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut depth = 0usize;
    let mut prev = '\0';
    text.char_indices().filter(move |&(_, c)| {
        let top = depth == 0;
        match c {
            '<' | '(' | '[' => depth += 1,
            // `->` is not a closing bracket
            '>' if prev == '-' => {}
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        prev = c;
        top
    })
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, c) in top_level_chars(text) {
        if c == ',' {
            pieces.push(&text[start..i]);
            start = i + 1;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Collapse a type that was written across several lines onto one line.
fn normalize_type(ty: &str) -> String {
    if ty.contains('\n') {
        ty.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        ty.to_string()
    }
}

/// Offset of the first non-whitespace byte of a match.
fn content_start(start: usize, matched: &str) -> usize {
    start + (matched.len() - matched.trim_start().len())
}

/// 1-based line number of a byte offset.
fn line_of(input: &str, offset: usize) -> usize {
    input[..offset].matches('\n').count() + 1
}
