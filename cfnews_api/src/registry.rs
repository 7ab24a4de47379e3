//! Static label-to-code tables for the CFNEWS filter vocabulary.
//!
//! The API filters on opaque numeric identifiers. Each [`Family`] maps the
//! human-readable labels for one filter category to those identifiers.

use crate::query::Scalar;

/// A filter category with its own code table.
///
/// Label sets are independent per family; the same label can map to a
/// different code in another family (e.g. "Avocats" in [`Family::ActorTypes`]
/// vs [`Family::OrganizationTypes`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Deal types (LBO, M&A Corporate, ...).
    OperationTypes,
    /// Business sectors, shared by operation and company searches.
    Sectors,
    /// Investment segments of a fund vehicle.
    FundSegments,
    /// Fundraising statuses of a fund vehicle.
    FundStatuses,
    /// Corporate-finance actor categories (funds, lawyers, bankers, ...).
    ActorTypes,
    /// French regions, shared by actor, company and people searches.
    Regions,
    /// Company ownership categories.
    CompanyTypes,
    /// Job titles in the people directory.
    PeopleTitles,
    /// Organization categories in the people directory.
    OrganizationTypes,
}

const OPERATION_TYPES: &[(&str, i64)] = &[
    ("LBO", 271),
    ("M&A Corporate", 272),
    ("Capital Développement", 273),
    ("Capital Innovation", 274),
    ("Immobilier", 275),
    ("Restructuration", 14447),
    ("Bourse", 25006),
    ("Financement", 29093),
    ("Infrastructure", 199547),
];

const SECTORS: &[(&str, i64)] = &[
    ("Biotechnologies", 124),
    ("Corporate Finance", 19486),
    ("Internet & ecommerce, eservices", 296),
    ("Logiciel et services informatiques", 297),
    ("Santé, beauté et services associés", 302),
    ("Services Financiers", 305),
];

const FUND_SEGMENTS: &[(&str, i64)] = &[
    ("Amorçage", 189606),
    ("Capital développement", 189607),
    ("Capital innovation / VC", 189608),
    ("Dette", 189609),
    ("Fonds de fonds", 189610),
    ("LBO", 189615),
];

const FUND_STATUSES: &[(&str, i64)] = &[
    ("En cours de levée", 189636),
    ("1er closing", 189637),
    ("Closé", 189639),
];

const ACTOR_TYPES: &[(&str, i64)] = &[
    ("Fonds d'investissement", 187),
    ("Avocats", 188),
    ("Banquiers", 189),
    ("Conseils", 190),
    ("Investisseurs institutionnels", 191),
    ("Asset Managers", 451255),
];

const REGIONS: &[(&str, i64)] = &[
    ("Grand Est", 132334),
    ("Île-de-France", 132336),
    ("Occitanie", 132354),
    ("Hauts-de-France", 132355),
    ("Auvergne-Rhône-Alpes", 132360),
];

const COMPANY_TYPES: &[(&str, i64)] = &[
    ("Indépendante", 259),
    ("Familiale", 260),
    ("Cotée", 18904),
    ("Sté sous LBO", 20104),
];

const PEOPLE_TITLES: &[(&str, i64)] = &[
    ("Directeur", 8406),
    ("Partner", 8408),
    ("Associé(e)", 8410),
    ("Directeur général", 8416),
];

const ORGANIZATION_TYPES: &[(&str, i64)] = &[
    ("Avocats", 207),
    ("Banquiers", 226),
    ("Conseils", 230),
    ("Fonds", 308),
];

impl Family {
    fn table(self) -> &'static [(&'static str, i64)] {
        match self {
            Family::OperationTypes => OPERATION_TYPES,
            Family::Sectors => SECTORS,
            Family::FundSegments => FUND_SEGMENTS,
            Family::FundStatuses => FUND_STATUSES,
            Family::ActorTypes => ACTOR_TYPES,
            Family::Regions => REGIONS,
            Family::CompanyTypes => COMPANY_TYPES,
            Family::PeopleTitles => PEOPLE_TITLES,
            Family::OrganizationTypes => ORGANIZATION_TYPES,
        }
    }
}

/// Resolves a human-readable label to its upstream numeric code.
///
/// Matching is exact and case-sensitive. Unknown labels are passed through
/// unchanged so callers can supply raw upstream codes directly; the API
/// decides their validity.
pub fn resolve(family: Family, label: &str) -> Scalar {
    match family.table().iter().find(|(name, _)| *name == label) {
        Some((_, code)) => Scalar::Int(*code),
        None => Scalar::Text(label.to_string()),
    }
}
