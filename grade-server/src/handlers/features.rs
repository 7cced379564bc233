//! Feature schema handler

use axum::Json;
use serde::Serialize;

use grade_core::logic::features::{FeatureSpec, LayoutInfo, FEATURE_SPECS};

#[derive(Serialize)]
pub struct FeaturesResponse {
    layout: LayoutInfo,
    features: &'static [FeatureSpec],
}

/// GET /api/v1/features
pub async fn list() -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        layout: LayoutInfo::current(),
        features: &FEATURE_SPECS,
    })
}
