//! Risk scoring and alerting are computed server-side; the request body is
//! whatever project snapshot the officer view assembles, so no request type
//! is fixed here.

use crate::usecases::common::UseCaseMetadata;

pub struct RiskAssessment;

impl UseCaseMetadata for RiskAssessment {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "risk_assessment"
    }
}
