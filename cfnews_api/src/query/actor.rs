use crate::registry::{resolve, Family};

use super::common::oui_non;
use super::{Filter, FilterSpec, Scalar};

/// Filters for the corporate-finance actors endpoint (funds, lawyers,
/// bankers, advisors).
#[derive(Clone, Debug, Default)]
pub struct ActorFilter {
    /// Actor name.
    pub actor_name: Option<String>,
    /// Actor category labels, resolved through [`Family::ActorTypes`].
    pub actor_types: Vec<String>,
    /// ISO country codes ("FR", "US", ...). Already codes; passed through.
    pub nationalities: Vec<String>,
    /// French region labels, resolved through [`Family::Regions`].
    pub regions: Vec<String>,
    /// Tri-state tech-fund filter: `None` means no filter.
    pub is_tech_fund: Option<bool>,
}

impl ActorFilter {
    pub fn with_actor_name(mut self, actor_name: &str) -> Self {
        self.actor_name = Some(actor_name.to_string());
        self
    }

    pub fn with_actor_type(mut self, actor_type: &str) -> Self {
        self.actor_types.push(actor_type.to_string());
        self
    }
    pub fn with_actor_types(mut self, actor_types: &[String]) -> Self {
        self.actor_types.extend_from_slice(actor_types);
        self
    }

    pub fn with_nationality(mut self, nationality: &str) -> Self {
        self.nationalities.push(nationality.to_string());
        self
    }
    pub fn with_nationalities(mut self, nationalities: &[String]) -> Self {
        self.nationalities.extend_from_slice(nationalities);
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

    pub fn with_is_tech_fund(mut self, is_tech_fund: bool) -> Self {
        self.is_tech_fund = Some(is_tech_fund);
        self
    }
}

impl Filter for ActorFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(actor_name) = &self.actor_name {
            spec.insert("acteur_nom", actor_name.as_str());
        }
        if !self.actor_types.is_empty() {
            spec.insert_list(
                "acteur_domaine",
                self.actor_types
                    .iter()
                    .map(|label| resolve(Family::ActorTypes, label))
                    .collect(),
            );
        }
        if !self.nationalities.is_empty() {
            spec.insert_list(
                "acteur_zone",
                self.nationalities
                    .iter()
                    .map(|code| Scalar::Text(code.clone()))
                    .collect(),
            );
        }
        if !self.regions.is_empty() {
            spec.insert_list(
                "acteur_region",
                self.regions
                    .iter()
                    .map(|label| resolve(Family::Regions, label))
                    .collect(),
            );
        }
        if let Some(is_tech_fund) = self.is_tech_fund {
            spec.insert("uniqut_istech", oui_non(is_tech_fund));
        }
        spec
    }
}
