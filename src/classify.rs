//! Heuristic struct categories for the structures reference.
//!
//! Rules are evaluated in order and the first match wins; anything that
//! matches no rule lands in [`Category::Other`].

use crate::model::StructDoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Account,
    Configuration,
    Data,
    Other,
}

impl Category {
    /// Render order.
    pub const ALL: [Category; 4] = [
        Category::Account,
        Category::Configuration,
        Category::Data,
        Category::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Account => "Account Structures",
            Category::Configuration => "Configuration Structures",
            Category::Data => "Data Structures",
            Category::Other => "Other Structures",
        }
    }
}

/// Lowercase name fragments that mark a data structure.
pub const DATA_KEYWORDS: &[&str] = &["data", "info", "cap", "snapshot"];

type Rule = (fn(&StructDoc) -> bool, Category);

const RULES: &[Rule] = &[
    (StructDoc::is_account, Category::Account),
    (is_configuration, Category::Configuration),
    (is_data, Category::Data),
];

fn is_configuration(s: &StructDoc) -> bool {
    s.name.to_lowercase().contains("config")
}

fn is_data(s: &StructDoc) -> bool {
    let name = s.name.to_lowercase();
    DATA_KEYWORDS.iter().any(|k| name.contains(k))
}

pub fn classify(s: &StructDoc) -> Category {
    RULES
        .iter()
        .find(|(matches, _)| matches(s))
        .map_or(Category::Other, |&(_, category)| category)
}

/// Partition structs into non-empty categories, in render order.
/// Extraction order is kept within each category.
pub fn group(structs: &[StructDoc]) -> Vec<(Category, Vec<&StructDoc>)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let members: Vec<&StructDoc> =
                structs.iter().filter(|s| classify(s) == category).collect();
            (category, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect()
}
