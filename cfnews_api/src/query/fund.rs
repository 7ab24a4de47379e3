use crate::registry::{resolve, Family};

use super::{Filter, FilterSpec, Scalar};

/// Filters for the investment-vehicle (fund) endpoint.
#[derive(Clone, Debug, Default)]
pub struct FundFilter {
    /// Vehicle name.
    pub fund_name: Option<String>,
    /// Management company name.
    pub management_company: Option<String>,
    /// Vehicle types (FCPR, FPCI, ...). No code table; passed through.
    pub fund_types: Vec<String>,
    /// Segment labels, resolved through [`Family::FundSegments`].
    pub segments: Vec<String>,
    /// Status labels, resolved through [`Family::FundStatuses`].
    pub statuses: Vec<String>,
    /// Minimum amount raised in M€.
    pub amount_raised_min: Option<f64>,
    /// Maximum amount raised in M€.
    pub amount_raised_max: Option<f64>,
}

impl FundFilter {
    pub fn with_fund_name(mut self, fund_name: &str) -> Self {
        self.fund_name = Some(fund_name.to_string());
        self
    }
    pub fn with_management_company(mut self, management_company: &str) -> Self {
        self.management_company = Some(management_company.to_string());
        self
    }

    pub fn with_fund_type(mut self, fund_type: &str) -> Self {
        self.fund_types.push(fund_type.to_string());
        self
    }
    pub fn with_fund_types(mut self, fund_types: &[String]) -> Self {
        self.fund_types.extend_from_slice(fund_types);
        self
    }

    pub fn with_segment(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }
    pub fn with_segments(mut self, segments: &[String]) -> Self {
        self.segments.extend_from_slice(segments);
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.statuses.push(status.to_string());
        self
    }
    pub fn with_statuses(mut self, statuses: &[String]) -> Self {
        self.statuses.extend_from_slice(statuses);
        self
    }

    pub fn with_amount_raised_min(mut self, amount_raised_min: f64) -> Self {
        self.amount_raised_min = Some(amount_raised_min);
        self
    }
    pub fn with_amount_raised_max(mut self, amount_raised_max: f64) -> Self {
        self.amount_raised_max = Some(amount_raised_max);
        self
    }
}

impl Filter for FundFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(fund_name) = &self.fund_name {
            spec.insert("vehicle_nom", fund_name.as_str());
        }
        if let Some(management_company) = &self.management_company {
            spec.insert("vehicle_soc_nom", management_company.as_str());
        }
        if !self.fund_types.is_empty() {
            spec.insert_list(
                "vehicle_type",
                self.fund_types
                    .iter()
                    .map(|value| Scalar::Text(value.clone()))
                    .collect(),
            );
        }
        if !self.segments.is_empty() {
            spec.insert_list(
                "vehicle_segment",
                self.segments
                    .iter()
                    .map(|label| resolve(Family::FundSegments, label))
                    .collect(),
            );
        }
        if !self.statuses.is_empty() {
            spec.insert_list(
                "vehicle_status",
                self.statuses
                    .iter()
                    .map(|label| resolve(Family::FundStatuses, label))
                    .collect(),
            );
        }
        if let Some(amount_raised_min) = self.amount_raised_min {
            spec.insert("Montantmin", amount_raised_min);
        }
        if let Some(amount_raised_max) = self.amount_raised_max {
            spec.insert("Montantmax", amount_raised_max);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterValue;

    #[test]
    fn segments_and_statuses_resolve_to_codes() {
        let spec = FundFilter::default()
            .with_segment("LBO")
            .with_status("Closé")
            .to_spec();
        assert_eq!(
            spec.entries(),
            &[
                (
                    "vehicle_segment".to_string(),
                    FilterValue::Many(vec![Scalar::Int(189615)])
                ),
                (
                    "vehicle_status".to_string(),
                    FilterValue::Many(vec![Scalar::Int(189639)])
                ),
            ]
        );
    }

    #[test]
    fn fund_types_pass_through_without_a_code_table() {
        let spec = FundFilter::default()
            .with_fund_types(&["FCPR".to_string(), "FPCI".to_string()])
            .to_spec();
        assert_eq!(
            spec.to_query_string(),
            "vehicle_type%5B%5D=FCPR&vehicle_type%5B%5D=FPCI"
        );
    }

    #[test]
    fn names_and_amounts_use_scalar_keys() {
        let spec = FundFilter::default()
            .with_fund_name("Growth I")
            .with_management_company("Alpha Gestion")
            .with_amount_raised_min(100.0)
            .to_spec();
        assert_eq!(
            spec.to_query_string(),
            "vehicle_nom=Growth%20I&vehicle_soc_nom=Alpha%20Gestion&Montantmin=100.0"
        );
    }
}
