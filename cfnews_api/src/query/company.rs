use crate::registry::{resolve, Family};

use super::common::oui_non;
use super::{Filter, FilterSpec};

/// Filters for the companies endpoint.
#[derive(Clone, Debug, Default)]
pub struct CompanyFilter {
    /// Company name.
    pub company_name: Option<String>,
    /// Ownership category labels, resolved through [`Family::CompanyTypes`].
    pub company_types: Vec<String>,
    /// Sector labels, resolved through [`Family::Sectors`].
    pub sectors: Vec<String>,
    /// French region labels, resolved through [`Family::Regions`].
    pub regions: Vec<String>,
    /// Minimum revenue in M€.
    pub revenue_min: Option<f64>,
    /// Maximum revenue in M€.
    pub revenue_max: Option<f64>,
    /// Tri-state tech-company filter: `None` means no filter.
    pub is_tech: Option<bool>,
}

impl CompanyFilter {
    pub fn with_company_name(mut self, company_name: &str) -> Self {
        self.company_name = Some(company_name.to_string());
        self
    }

    pub fn with_company_type(mut self, company_type: &str) -> Self {
        self.company_types.push(company_type.to_string());
        self
    }
    pub fn with_company_types(mut self, company_types: &[String]) -> Self {
        self.company_types.extend_from_slice(company_types);
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

    pub fn with_region(mut self, region: &str) -> Self {
        self.regions.push(region.to_string());
        self
    }
    pub fn with_regions(mut self, regions: &[String]) -> Self {
        self.regions.extend_from_slice(regions);
        self
    }

    pub fn with_revenue_min(mut self, revenue_min: f64) -> Self {
        self.revenue_min = Some(revenue_min);
        self
    }
    pub fn with_revenue_max(mut self, revenue_max: f64) -> Self {
        self.revenue_max = Some(revenue_max);
        self
    }

    pub fn with_is_tech(mut self, is_tech: bool) -> Self {
        self.is_tech = Some(is_tech);
        self
    }
}

impl Filter for CompanyFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(company_name) = &self.company_name {
            spec.insert("soc_nom", company_name.as_str());
        }
        if !self.company_types.is_empty() {
            spec.insert_list(
                "soc_activity",
                self.company_types
                    .iter()
                    .map(|label| resolve(Family::CompanyTypes, label))
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
        if !self.regions.is_empty() {
            spec.insert_list(
                "soc_region",
                self.regions
                    .iter()
                    .map(|label| resolve(Family::Regions, label))
                    .collect(),
            );
        }
        if let Some(revenue_min) = self.revenue_min {
            spec.insert("soc_camin", revenue_min);
        }
        if let Some(revenue_max) = self.revenue_max {
            spec.insert("soc_camax", revenue_max);
        }
        if let Some(is_tech) = self.is_tech {
            spec.insert("uniqut_istech", oui_non(is_tech));
        }
        spec
    }
}
