use crate::registry::{resolve, Family};

use super::{Filter, FilterSpec};

/// Filters for the operations (deals) endpoint.
#[derive(Clone, Debug, Default)]
pub struct OperationFilter {
    /// Target company name.
    pub company_name: Option<String>,
    /// Deal type labels, resolved through [`Family::OperationTypes`].
    pub operation_types: Vec<String>,
    /// Sector labels, resolved through [`Family::Sectors`].
    pub sectors: Vec<String>,
    /// Start date, `DD/MM/YYYY`. Passed through unvalidated.
    pub date_from: Option<String>,
    /// End date, `DD/MM/YYYY`. Passed through unvalidated.
    pub date_to: Option<String>,
    /// Minimum deal amount in M€.
    pub amount_min: Option<f64>,
    /// Maximum deal amount in M€.
    pub amount_max: Option<f64>,
}

impl OperationFilter {
    pub fn with_company_name(mut self, company_name: &str) -> Self {
        self.company_name = Some(company_name.to_string());
        self
    }

    pub fn with_operation_type(mut self, operation_type: &str) -> Self {
        self.operation_types.push(operation_type.to_string());
        self
    }
    pub fn with_operation_types(mut self, operation_types: &[String]) -> Self {
        self.operation_types.extend_from_slice(operation_types);
        self
    }

    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sectors.push(sector.to_string());
        self
    }
    pub fn with_sectors(mut self, sectors: &[String]) -> Self {
        self.sectors.extend_from_slice(sectors);
        self
    }

    pub fn with_date_from(mut self, date_from: &str) -> Self {
        self.date_from = Some(date_from.to_string());
        self
    }
    pub fn with_date_to(mut self, date_to: &str) -> Self {
        self.date_to = Some(date_to.to_string());
        self
    }

    pub fn with_amount_min(mut self, amount_min: f64) -> Self {
        self.amount_min = Some(amount_min);
        self
    }
    pub fn with_amount_max(mut self, amount_max: f64) -> Self {
        self.amount_max = Some(amount_max);
        self
    }
}

impl Filter for OperationFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(company_name) = &self.company_name {
            spec.insert("op_nom", company_name.as_str());
        }
        if !self.operation_types.is_empty() {
            spec.insert_list(
                "op_type",
                self.operation_types
                    .iter()
                    .map(|label| resolve(Family::OperationTypes, label))
                    .collect(),
            );
        }
        if !self.sectors.is_empty() {
            spec.insert_list(
                "sector",
                self.sectors
                    .iter()
                    .map(|label| resolve(Family::Sectors, label))
                    .collect(),
            );
        }
        if let Some(date_from) = &self.date_from {
            spec.insert("depuis", date_from.as_str());
        }
        if let Some(date_to) = &self.date_to {
            spec.insert("jusquau", date_to.as_str());
        }
        if let Some(amount_min) = self.amount_min {
            spec.insert("Montantmin", amount_min);
        }
        if let Some(amount_max) = self.amount_max {
            spec.insert("Montantmax", amount_max);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterValue, Scalar};

    #[test]
    fn empty_filter_emits_no_keys() {
        assert!(OperationFilter::default().to_spec().is_empty());
    }

    #[test]
    fn types_resolve_and_dates_pass_through() {
        let spec = OperationFilter::default()
            .with_operation_type("LBO")
            .with_date_from("01/01/2024")
            .with_date_to("31/12/2024")
            .to_spec();
        assert_eq!(
            spec.entries(),
            &[
                (
                    "op_type".to_string(),
                    FilterValue::Many(vec![Scalar::Int(271)])
                ),
                (
                    "depuis".to_string(),
                    FilterValue::One(Scalar::Text("01/01/2024".to_string()))
                ),
                (
                    "jusquau".to_string(),
                    FilterValue::One(Scalar::Text("31/12/2024".to_string()))
                ),
            ]
        );
    }

    #[test]
    fn unknown_type_passes_through_alongside_known_ones() {
        let spec = OperationFilter::default()
            .with_operation_types(&["LBO".to_string(), "Carve-out".to_string()])
            .to_spec();
        assert_eq!(
            spec.entries()[0].1,
            FilterValue::Many(vec![
                Scalar::Int(271),
                Scalar::Text("Carve-out".to_string())
            ])
        );
    }

    #[test]
    fn amounts_are_emitted_as_floats() {
        let spec = OperationFilter::default()
            .with_company_name("Acme")
            .with_amount_min(10.0)
            .with_amount_max(250.5)
            .to_spec();
        assert_eq!(
            spec.to_query_string(),
            "op_nom=Acme&Montantmin=10.0&Montantmax=250.5"
        );
    }
}
