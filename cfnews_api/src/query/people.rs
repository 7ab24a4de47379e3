use crate::registry::{resolve, Family};

use super::{Filter, FilterSpec};

/// Filters for the people-directory endpoint.
#[derive(Clone, Debug, Default)]
pub struct PeopleFilter {
    /// First or last name.
    pub name: Option<String>,
    /// Current organization name.
    pub organization: Option<String>,
    /// Title labels, resolved through [`Family::PeopleTitles`].
    pub titles: Vec<String>,
    /// Organization category labels, resolved through
    /// [`Family::OrganizationTypes`].
    pub organization_types: Vec<String>,
    /// French region labels, resolved through [`Family::Regions`].
    pub regions: Vec<String>,
    /// Restrict to executive-committee members. Flag: emitted only when set.
    pub executives_only: bool,
    /// Restrict to entries with an email address. Flag: emitted only when set.
    pub with_email: bool,
}

impl PeopleFilter {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organization = Some(organization.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }
    pub fn with_titles(mut self, titles: &[String]) -> Self {
        self.titles.extend_from_slice(titles);
        self
    }

    pub fn with_organization_type(mut self, organization_type: &str) -> Self {
        self.organization_types.push(organization_type.to_string());
        self
    }
    pub fn with_organization_types(mut self, organization_types: &[String]) -> Self {
        self.organization_types.extend_from_slice(organization_types);
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

    pub fn executives_only(mut self) -> Self {
        self.executives_only = true;
        self
    }
    pub fn with_email(mut self) -> Self {
        self.with_email = true;
        self
    }
}

impl Filter for PeopleFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(name) = &self.name {
            spec.insert("people_nom", name.as_str());
        }
        if let Some(organization) = &self.organization {
            spec.insert("people_societe", organization.as_str());
        }
        if !self.titles.is_empty() {
            spec.insert_list(
                "people_titres",
                self.titles
                    .iter()
                    .map(|label| resolve(Family::PeopleTitles, label))
                    .collect(),
            );
        }
        if !self.organization_types.is_empty() {
            spec.insert_list(
                "people_type_organisation",
                self.organization_types
                    .iter()
                    .map(|label| resolve(Family::OrganizationTypes, label))
                    .collect(),
            );
        }
        if !self.regions.is_empty() {
            spec.insert_list(
                "people_region",
                self.regions
                    .iter()
                    .map(|label| resolve(Family::Regions, label))
                    .collect(),
            );
        }
        if self.executives_only {
            spec.insert("ciblage_dirigeants", "Dirigeants");
        }
        if self.with_email {
            spec.insert("uniqut_avec_email", "oui");
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterValue, Scalar};

    #[test]
    fn titles_and_organization_types_use_separate_tables() {
        let spec = PeopleFilter::default()
            .with_title("Directeur général")
            .with_organization_type("Avocats")
            .to_spec();
        assert_eq!(
            spec.entries()[0].1,
            FilterValue::Many(vec![Scalar::Int(8416)])
        );
        // "Avocats" maps to 207 here, not the actor-family 188.
        assert_eq!(
            spec.entries()[1].1,
            FilterValue::Many(vec![Scalar::Int(207)])
        );
    }

    #[test]
    fn flags_are_emitted_only_when_enabled() {
        assert!(PeopleFilter::default().to_spec().is_empty());
        let spec = PeopleFilter::default()
            .executives_only()
            .with_email()
            .to_spec();
        assert_eq!(
            spec.to_query_string(),
            "ciblage_dirigeants=Dirigeants&uniqut_avec_email=oui"
        );
    }

    #[test]
    fn name_and_organization_are_scalars() {
        let spec = PeopleFilter::default()
            .with_name("Martin")
            .with_organization("Alpha Gestion")
            .to_spec();
        assert_eq!(
            spec.to_query_string(),
            "people_nom=Martin&people_societe=Alpha%20Gestion"
        );
    }
}
