//! Minification transforms of the minimizer stage.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// License comments kept out of minified bundles
pub const LICENSE_COMMENT_CONDITION: &str = r"^\**!|@preserve|@license|@cc_on";

/// A minification transform, in the order the bundler applies them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "minimizer", content = "options", rename_all = "kebab-case")]
pub enum Minimizer {
    /// Script minifier (terser)
    Terser(ScriptMinifierOptions),
    /// CSS minifier, options forwarded verbatim
    Css(Map<String, Value>),
}

impl Minimizer {
    pub fn name(&self) -> &'static str {
        match self {
            Minimizer::Terser(_) => "terser",
            Minimizer::Css(_) => "css",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptMinifierOptions {
    pub cache: bool,
    /// Comment extraction rule, or `false` to keep comments inline
    pub extract_comments: Value,
    pub terser_options: TerserOptions,
    /// User options without a typed field
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScriptMinifierOptions {
    pub fn new(cache: bool, modern: bool) -> Self {
        Self {
            cache,
            extract_comments: json!({
                "condition": LICENSE_COMMENT_CONDITION,
                "filename": "LICENSES",
            }),
            terser_options: TerserOptions::new(modern),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerserOptions {
    pub compress: Map<String, Value>,
    pub mangle: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TerserOptions {
    /// Modern bundles may be compressed with ES2015 syntax
    pub fn new(modern: bool) -> Self {
        let mut compress = Map::new();
        if modern {
            compress.insert("ecma".to_string(), Value::from(6));
        }
        let mut mangle = Map::new();
        mangle.insert("safari10".to_string(), Value::Bool(true));

        Self {
            compress,
            mangle,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecma_is_set_for_modern_only() {
        assert!(TerserOptions::new(false).compress.get("ecma").is_none());
        assert_eq!(TerserOptions::new(true).compress["ecma"], json!(6));
    }

    #[test]
    fn serializes_as_tagged_descriptor() {
        let value = serde_json::to_value(Minimizer::Terser(ScriptMinifierOptions::new(true, false)))
            .unwrap();
        assert_eq!(value["minimizer"], json!("terser"));
        assert_eq!(value["options"]["extractComments"]["filename"], json!("LICENSES"));
        assert_eq!(value["options"]["terserOptions"]["mangle"]["safari10"], json!(true));

        let css = serde_json::to_value(Minimizer::Css(Map::new())).unwrap();
        assert_eq!(css, json!({ "minimizer": "css", "options": {} }));
    }
}
