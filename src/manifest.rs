//! TOML manifests declaring several rule families at once.
//!
//! A manifest names each family and gives its template, either as inline
//! text or as a legend plus row list:
//!
//! ```toml
//! [rules.walls]
//! template = """
//! a
//! .#.
//! #a#
//! .#.
//! """
//!
//! [rules.floors]
//! symbols = "fg"
//! rows = [".f.", ".g."]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::registry::{DuplicateFamily, RuleSet};
use crate::template::Template;
use crate::CompileError;

/// Errors from loading or compiling a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A family declares neither an inline template nor a symbols/rows pair.
    #[error("rule family '{family}' needs either `template` or both `symbols` and `rows`")]
    MissingTemplate { family: String },

    /// A family declares both template forms, so it is unclear which wins.
    #[error("rule family '{family}' declares both `template` and `symbols`/`rows`")]
    AmbiguousTemplate { family: String },

    /// A family's template failed to parse or compile.
    #[error("rule family '{family}': {source}")]
    Rule {
        family: String,
        source: CompileError,
    },

    #[error(transparent)]
    Duplicate(#[from] DuplicateFamily),
}

/// One family's template, in whichever form the manifest used.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplateSource {
    Text(String),
    Parts { symbols: String, rows: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    rules: BTreeMap<String, RuleDecl>,
}

#[derive(Debug, Deserialize)]
struct RuleDecl {
    template: Option<String>,
    symbols: Option<String>,
    rows: Option<Vec<String>>,
}

/// A parsed manifest: validated family declarations, not yet compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    families: BTreeMap<String, TemplateSource>,
}

impl Manifest {
    /// Parse manifest TOML.
    pub fn from_str(text: &str) -> Result<Self, ManifestError> {
        let doc: ManifestDoc = toml::from_str(text)?;
        let mut families = BTreeMap::new();
        for (family, decl) in doc.rules {
            let source = match (decl.template, decl.symbols, decl.rows) {
                (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                    return Err(ManifestError::AmbiguousTemplate { family });
                }
                (Some(text), None, None) => TemplateSource::Text(text),
                (None, Some(symbols), Some(rows)) => TemplateSource::Parts { symbols, rows },
                (None, _, _) => {
                    return Err(ManifestError::MissingTemplate { family });
                }
            };
            families.insert(family, source);
        }
        Ok(Manifest { families })
    }

    /// Load and parse a manifest file.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Declared family names in sort order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Compile every family into a [`RuleSet`]. Errors name the family
    /// they came from.
    pub fn compile(&self) -> Result<RuleSet, ManifestError> {
        let mut set = RuleSet::new();
        for (family, source) in &self.families {
            let template = match source {
                TemplateSource::Text(text) => crate::template::parse(text),
                TemplateSource::Parts { symbols, rows } => Template::from_parts(symbols, rows),
            }
            .map_err(|error| ManifestError::Rule {
                family: family.clone(),
                source: error.into(),
            })?;
            let rule = template.compile().map_err(|error| ManifestError::Rule {
                family: family.clone(),
                source: error.into(),
            })?;
            set.insert(family.clone(), rule)?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest_compiles_to_empty_set() {
        let manifest = Manifest::from_str("").expect("Should parse");
        assert!(manifest.is_empty());
        let set = manifest.compile().expect("Should compile");
        assert!(set.is_empty());
    }

    #[test]
    fn test_template_and_parts_forms_are_equivalent() {
        let text = concat!(
            "[rules.a]\n",
            "template = \"\"\"\n",
            "w\n",
            ".#.\n",
            "#w#\n",
            ".#.\"\"\"\n",
            "[rules.b]\n",
            "symbols = \"w\"\n",
            "rows = [\".#.\", \"#w#\", \".#.\"]\n",
        );
        let set = Manifest::from_str(text)
            .expect("Should parse")
            .compile()
            .expect("Should compile");
        assert_eq!(
            set.get("a").expect("Should have 'a'"),
            set.get("b").expect("Should have 'b'")
        );
    }

    #[test]
    fn test_missing_template_rejected() {
        let err = Manifest::from_str("[rules.walls]\nsymbols = \"w\"\n")
            .expect_err("Should reject symbols without rows");
        assert!(matches!(err, ManifestError::MissingTemplate { family } if family == "walls"));
    }

    #[test]
    fn test_ambiguous_template_rejected() {
        let text = concat!(
            "[rules.walls]\n",
            "template = \"w\\n.w.\"\n",
            "symbols = \"w\"\n",
            "rows = [\".w.\"]\n",
        );
        let err = Manifest::from_str(text).expect_err("Should reject both forms");
        assert!(matches!(err, ManifestError::AmbiguousTemplate { family } if family == "walls"));
    }
}
