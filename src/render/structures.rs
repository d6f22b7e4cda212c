//! `api-structures.md` — every struct, grouped by category.

use crate::classify;
use crate::model::Catalog;
use crate::render::markdown::render_struct;
use crate::render::Renderer;

pub struct StructuresRenderer;

impl Renderer for StructuresRenderer {
    fn file_name(&self) -> &str {
        "api-structures.md"
    }

    fn render(&self, catalog: &Catalog) -> Option<String> {
        let mut output = String::new();
        output.push_str("# API Structures Reference\n\n");
        output.push_str("Comprehensive reference for all data structures used in the protocol.\n");

        for (category, structs) in classify::group(catalog.structs) {
            output.push_str(&format!("\n## {}\n", category.title()));
            for s in structs {
                output.push('\n');
                output.push_str(&render_struct(s));
            }
        }

        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StructDoc;

    fn with_attrs(name: &str, attrs: &[&str]) -> StructDoc {
        StructDoc {
            name: name.to_string(),
            doc: String::new(),
            fields: vec![],
            attributes: attrs.iter().map(|a| a.to_string()).collect(),
            source_file: "models.rs".to_string(),
            line: 1,
            size_calculation: None,
        }
    }

    #[test]
    fn empty_catalog_still_renders() {
        let output = StructuresRenderer.render(&Catalog::new(&[], &[])).unwrap();
        assert_eq!(
            output,
            "# API Structures Reference\n\nComprehensive reference for all data structures used in the protocol.\n"
        );
    }

    #[test]
    fn zero_copy_account_only_under_accounts() {
        let structs = vec![
            with_attrs("ReserveConfig", &[]),
            with_attrs("Reserve", &["account(zero_copy)"]),
        ];
        let output = StructuresRenderer.render(&Catalog::new(&structs, &[])).unwrap();

        let accounts = output.find("## Account Structures").unwrap();
        let config = output.find("## Configuration Structures").unwrap();
        let reserve = output.find("### Reserve\n").unwrap();
        assert!(accounts < reserve && reserve < config);
        assert!(!output.contains("## Data Structures"));
        assert!(!output.contains("## Other Structures"));
        assert_eq!(output.matches("### Reserve\n").count(), 1);
    }

    #[test]
    fn categories_in_fixed_order() {
        let structs = vec![
            with_attrs("Obligation", &[]),
            with_attrs("PriceInfo", &[]),
            with_attrs("MarketConfig", &[]),
            with_attrs("LendingMarket", &["account"]),
        ];
        let output = StructuresRenderer.render(&Catalog::new(&structs, &[])).unwrap();
        let positions: Vec<usize> = [
            "## Account Structures",
            "## Configuration Structures",
            "## Data Structures",
            "## Other Structures",
        ]
        .iter()
        .map(|h| output.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
