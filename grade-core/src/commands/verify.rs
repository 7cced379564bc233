use anyhow::{Context, Result};
use clap::Args;

use crate::logic::artifact::{ArtifactConfig, ArtifactInfo, ArtifactSet};
use crate::logic::features::LayoutInfo;

/// Load both artifacts and print their metadata
#[derive(Args, Debug, Clone)]
pub struct VerifyCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

fn describe(info: &ArtifactInfo) -> String {
    let created = info
        .created_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "{:<16} {}\n  sha256:  {}\n  created: {}\n",
        info.kind.to_string(),
        info.path.display(),
        info.checksum,
        created
    )
}

impl VerifyCommand {
    pub fn render(&self, set: &ArtifactSet) -> Result<String> {
        let layout = LayoutInfo::current();

        if self.json {
            let body = serde_json::json!({
                "layout": layout,
                "scaler": set.scaler_info,
                "model": set.model_info,
                "model_backend": set.model.name(),
            });
            return Ok(serde_json::to_string_pretty(&body)?);
        }

        Ok(format!(
            "Layout v{} (hash {:08x}) OK\n{}{}",
            layout.version,
            layout.hash,
            describe(&set.scaler_info),
            describe(&set.model_info)
        ))
    }

    pub fn run(&self, config: &ArtifactConfig) -> Result<()> {
        let set = ArtifactSet::load(config)
            .with_context(|| format!("verifying artifacts in {}", config.dir.display()))?;
        print!("{}", self.render(&set)?);
        Ok(())
    }
}
