//! The modern (ES2015+) browser variant.

use crate::config::BundlerConfig;
use crate::env::EnvironmentMap;
use crate::minimizer::Minimizer;
use crate::naming::AssetClass;
use crate::optimization::Optimization;
use crate::plugins::Plugin;
use crate::variant::VariantIdentity;

use super::{ClientVariant, StageContext, Variant};

/// Client stages under the modern identity
#[derive(Debug, Clone)]
pub struct ModernVariant {
    client: ClientVariant,
}

impl ModernVariant {
    pub fn new() -> Self {
        Self {
            client: ClientVariant::with_identity(VariantIdentity::modern()),
        }
    }
}

impl Default for ModernVariant {
    fn default() -> Self {
        Self::new()
    }
}

impl Variant for ModernVariant {
    fn identity(&self) -> VariantIdentity {
        self.client.identity()
    }

    fn env(&self, cx: &StageContext<'_>) -> EnvironmentMap {
        let mut env = self.client.env(cx);
        env.insert_bool("process.modern", true);
        env
    }

    fn file_name(&self, cx: &StageContext<'_>, class: AssetClass) -> String {
        self.client.file_name(cx, class)
    }

    fn optimization(&self, cx: &StageContext<'_>) -> Optimization {
        self.client.optimization(cx)
    }

    fn minimizer(&self, cx: &StageContext<'_>) -> Vec<Minimizer> {
        self.client.minimizer(cx)
    }

    fn plugins(&self, cx: &StageContext<'_>) -> Vec<Plugin> {
        self.client.plugins(cx)
    }

    fn config(&self, cx: &StageContext<'_>) -> BundlerConfig {
        self.client.config(cx)
    }
}
