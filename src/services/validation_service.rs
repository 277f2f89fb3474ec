//! Cedula validation service layer.
//!
//! Wraps the pure validator with localization, logging and metrics, and
//! shapes results for transport.

use crate::config::Config;
use crate::domain::{self, mask, Cedula, CedulaError, Province, RejectionReason};
use crate::error::{ServiceError, ServiceResult};
use crate::locale::Locale;
use crate::metrics::Metrics;
use serde::Serialize;

/// Outcome of validating a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Trimmed input, or `None` when the input was not text
    pub input: Option<String>,

    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_name: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,

    /// Localized, user-facing rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationReport {
    fn accepted(cedula: &Cedula) -> Self {
        Self {
            input: Some(cedula.as_str().to_string()),
            valid: true,
            province_code: Some(cedula.province_code()),
            province_name: Some(cedula.province_name()),
            reason: None,
            message: None,
        }
    }

    fn rejected(input: Option<String>, err: &CedulaError, locale: Locale) -> Self {
        Self {
            input,
            valid: false,
            province_code: None,
            province_name: None,
            reason: Some(err.reason()),
            message: Some(err.message(locale)),
        }
    }
}

/// Outcome of a batch validation, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub results: Vec<ValidationReport>,
}

/// Result of a province code lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvinceLookup {
    pub code: String,
    pub found: bool,
    /// Province name, or the localized unknown-province placeholder
    pub name: String,
}

/// Validation service trait.
pub trait CedulaService: Send + Sync {
    /// Validate one candidate of any JSON type.
    fn validate(&self, candidate: &serde_json::Value) -> ValidationReport;

    /// Validate many candidates, preserving order.
    fn validate_batch(&self, candidates: &[serde_json::Value]) -> ServiceResult<BatchReport>;

    /// Boolean predicate for form validation.
    fn is_valid(&self, candidate: &serde_json::Value) -> bool;

    /// Resolve a province code.
    fn province_name(&self, code: &str) -> ProvinceLookup;

    /// All provinces, `01`..`24` then `30`.
    fn provinces(&self) -> Vec<Province>;

    /// Counters for this service instance.
    fn metrics(&self) -> &Metrics;
}

/// Default implementation of CedulaService.
pub struct CedulaServiceImpl {
    locale: Locale,
    max_batch_size: usize,
    metrics: Metrics,
}

impl CedulaServiceImpl {
    /// Create a new validation service.
    pub fn new(locale: Locale, max_batch_size: usize, metrics: Metrics) -> Self {
        Self {
            locale,
            max_batch_size,
            metrics,
        }
    }

    /// Create a service from loaded configuration.
    pub fn from_config(config: &Config, metrics: Metrics) -> Self {
        Self::new(config.locale, config.max_batch_size, metrics)
    }

    fn check(&self, candidate: &serde_json::Value) -> Result<Cedula, CedulaError> {
        let result = domain::validate_value(candidate);
        match &result {
            Ok(cedula) => {
                self.metrics.record_accepted();
                tracing::debug!(
                    cedula = %cedula.masked(),
                    province = cedula.province_code(),
                    "Cedula accepted"
                );
            }
            Err(err) => {
                self.metrics.record_rejected(err.reason());
                tracing::info!(
                    input = %describe(candidate),
                    reason = %err.reason(),
                    "Cedula rejected"
                );
            }
        }
        result
    }
}

/// Masked description of a candidate for logs.
fn describe(candidate: &serde_json::Value) -> String {
    match candidate {
        serde_json::Value::String(s) => mask(s),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(_) => "<bool>".to_string(),
        serde_json::Value::Number(_) => "<number>".to_string(),
        serde_json::Value::Array(_) => "<array>".to_string(),
        serde_json::Value::Object(_) => "<object>".to_string(),
    }
}

impl CedulaService for CedulaServiceImpl {
    fn validate(&self, candidate: &serde_json::Value) -> ValidationReport {
        match self.check(candidate) {
            Ok(cedula) => ValidationReport::accepted(&cedula),
            Err(err) => {
                let input = candidate.as_str().map(|s| s.trim().to_string());
                ValidationReport::rejected(input, &err, self.locale)
            }
        }
    }

    fn validate_batch(&self, candidates: &[serde_json::Value]) -> ServiceResult<BatchReport> {
        if candidates.is_empty() {
            return Err(ServiceError::EmptyBatch);
        }
        if candidates.len() > self.max_batch_size {
            tracing::warn!(
                size = candidates.len(),
                max = self.max_batch_size,
                "Batch rejected: too large"
            );
            return Err(ServiceError::BatchTooLarge {
                size: candidates.len(),
                max: self.max_batch_size,
            });
        }

        self.metrics.record_batch();

        let results: Vec<ValidationReport> =
            candidates.iter().map(|c| self.validate(c)).collect();
        let valid_count = results.iter().filter(|r| r.valid).count();

        tracing::info!(
            total = results.len(),
            valid = valid_count,
            "Batch validation completed"
        );

        Ok(BatchReport {
            total: results.len(),
            valid_count,
            invalid_count: results.len() - valid_count,
            results,
        })
    }

    fn is_valid(&self, candidate: &serde_json::Value) -> bool {
        self.check(candidate).is_ok()
    }

    fn province_name(&self, code: &str) -> ProvinceLookup {
        let code = code.trim();
        match Province::from_code(code) {
            Some(province) => ProvinceLookup {
                code: code.to_string(),
                found: true,
                name: province.name.to_string(),
            },
            None => ProvinceLookup {
                code: code.to_string(),
                found: false,
                name: self.locale.unknown_province().to_string(),
            },
        }
    }

    fn provinces(&self) -> Vec<Province> {
        domain::all_provinces().to_vec()
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> CedulaServiceImpl {
        CedulaServiceImpl::new(Locale::Es, 3, Metrics::new())
    }

    #[test]
    fn test_validate_accepted() {
        let report = service().validate(&json!("1710034065"));
        assert!(report.valid);
        assert_eq!(report.province_code, Some("17"));
        assert_eq!(report.province_name, Some("Pichincha"));
        assert_eq!(report.reason, None);
        assert_eq!(report.message, None);
    }

    #[test]
    fn test_validate_rejected_not_a_string() {
        let report = service().validate(&json!(42));
        assert!(!report.valid);
        assert_eq!(report.input, None);
        assert_eq!(report.reason, Some(RejectionReason::NotAString));
        assert_eq!(report.message.as_deref(), Some("La cédula debe ser un texto"));
    }

    #[test]
    fn test_validate_echoes_trimmed_input() {
        let report = service().validate(&json!("  171003406A "));
        assert_eq!(report.input.as_deref(), Some("171003406A"));
        assert_eq!(report.reason, Some(RejectionReason::NonNumeric));
    }

    #[test]
    fn test_report_serialization_skips_empty_fields() {
        let report = service().validate(&json!("1710034065"));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "input": "1710034065",
                "valid": true,
                "province_code": "17",
                "province_name": "Pichincha",
            })
        );

        let report = service().validate(&json!("9999999999"));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["reason"], "INVALID_PROVINCE");
        assert_eq!(value["message"], "Código de provincia inválido: 99");
        assert!(value.get("province_code").is_none());
    }

    #[test]
    fn test_batch_limits() {
        let svc = service();
        assert_eq!(svc.validate_batch(&[]), Err(ServiceError::EmptyBatch));

        let too_many = vec![json!("1710034065"); 4];
        assert_eq!(
            svc.validate_batch(&too_many),
            Err(ServiceError::BatchTooLarge { size: 4, max: 3 })
        );
        assert_eq!(svc.metrics().batches_total(), 0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let svc = service();
        let report = svc
            .validate_batch(&[json!("1710034065"), json!(null), json!("1762034065")])
            .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.valid_count, 1);
        assert_eq!(report.invalid_count, 2);
        assert!(report.results[0].valid);
        assert_eq!(report.results[1].reason, Some(RejectionReason::NotAString));
        assert_eq!(
            report.results[2].reason,
            Some(RejectionReason::InvalidThirdDigit)
        );
        assert_eq!(svc.metrics().batches_total(), 1);
        assert_eq!(svc.metrics().validations_total(), 3);
    }

    #[test]
    fn test_province_name_lookup() {
        let svc = service();
        let found = svc.province_name("09");
        assert!(found.found);
        assert_eq!(found.name, "Guayas");

        let missing = svc.province_name("27");
        assert!(!missing.found);
        assert_eq!(missing.name, "Provincia desconocida");
    }

    #[test]
    fn test_metrics_recorded() {
        let svc = service();
        svc.validate(&json!("1710034065"));
        assert!(!svc.is_valid(&json!("")));

        assert_eq!(svc.metrics().accepted_total(), 1);
        assert_eq!(
            svc.metrics().rejected_for(RejectionReason::InvalidLength),
            1
        );
    }

    #[test]
    fn test_describe_masks_strings() {
        assert_eq!(describe(&json!("1710034065")), "17******65");
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!([1])), "<array>");
    }
}
