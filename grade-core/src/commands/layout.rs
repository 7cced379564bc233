use anyhow::Result;
use clap::Args;

use crate::logic::features::{FeatureKind, LayoutInfo, FEATURE_SPECS};

/// Print the feature schema in model input order
#[derive(Args, Debug, Clone)]
pub struct LayoutCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl LayoutCommand {
    pub fn render(&self) -> Result<String> {
        let info = LayoutInfo::current();

        if self.json {
            let body = serde_json::json!({
                "layout": info,
                "features": FEATURE_SPECS,
            });
            return Ok(serde_json::to_string_pretty(&body)?);
        }

        let mut out = format!("Feature layout v{} (hash {:08x})\n", info.version, info.hash);
        for (i, spec) in FEATURE_SPECS.iter().enumerate() {
            let range = match (spec.kind, spec.max) {
                (FeatureKind::Boolean, _) => "Yes/No".to_string(),
                (_, Some(max)) => format!("{}-{}", spec.min, max),
                (_, None) => format!(">= {}", spec.min),
            };
            out.push_str(&format!(
                "({}) {:<10} {:<8} {}\n",
                i + 1,
                spec.label,
                range,
                spec.description
            ));
        }
        Ok(out)
    }

    pub fn run(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}
