use cfnews_api::{
    ActorFilter, CompanyFilter, Filter, FilterValue, FundFilter, NewsFilter, OperationFilter,
    PeopleFilter, Scalar,
};

fn entry<'a>(spec: &'a cfnews_api::FilterSpec, key: &str) -> &'a FilterValue {
    spec.entries()
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
        .unwrap_or_else(|| panic!("missing key {}", key))
}

#[test]
fn operation_scenario_lbo_with_date_range() {
    let spec = OperationFilter::default()
        .with_operation_type("LBO")
        .with_date_from("01/01/2024")
        .with_date_to("31/12/2024")
        .to_spec();

    assert_eq!(
        entry(&spec, "op_type"),
        &FilterValue::Many(vec![Scalar::Int(271)])
    );
    assert_eq!(
        entry(&spec, "depuis"),
        &FilterValue::One(Scalar::Text("01/01/2024".to_string()))
    );
    assert_eq!(
        entry(&spec, "jusquau"),
        &FilterValue::One(Scalar::Text("31/12/2024".to_string()))
    );
    assert_eq!(spec.entries().len(), 3);
}

#[test]
fn actor_scenario_nationalities_pass_through() {
    let spec = ActorFilter::default()
        .with_nationalities(&["FR".to_string(), "US".to_string()])
        .to_spec();

    assert_eq!(
        spec.entries(),
        &[(
            "acteur_zone".to_string(),
            FilterValue::Many(vec![
                Scalar::Text("FR".to_string()),
                Scalar::Text("US".to_string())
            ])
        )]
    );
}

#[test]
fn list_filters_produce_one_bracketed_segment_per_element() {
    let spec = OperationFilter::default()
        .with_operation_types(&["LBO".to_string(), "Capital Développement".to_string()])
        .to_spec();
    assert_eq!(
        spec.to_query_string(),
        "op_type%5B%5D=271&op_type%5B%5D=273"
    );
}

#[test]
fn encoder_keeps_every_key_and_adds_none() {
    let spec = CompanyFilter::default()
        .with_company_name("Acme")
        .with_sector("Biotechnologies")
        .with_region("Occitanie")
        .with_revenue_min(5.0)
        .with_is_tech(false)
        .to_spec();

    let encoded = spec.to_query_string();
    let keys: Vec<&str> = encoded
        .split('&')
        .map(|segment| segment.split('=').next().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            "soc_nom",
            "sector%5B%5D",
            "soc_region%5B%5D",
            "soc_camin",
            "uniqut_istech"
        ]
    );
}

#[test]
fn fund_scenario_mixed_known_and_raw_labels() {
    let spec = FundFilter::default()
        .with_segments(&["LBO".to_string(), "Secondaire".to_string()])
        .with_status("En cours de levée")
        .to_spec();

    assert_eq!(
        entry(&spec, "vehicle_segment"),
        &FilterValue::Many(vec![
            Scalar::Int(189615),
            Scalar::Text("Secondaire".to_string())
        ])
    );
    assert_eq!(
        entry(&spec, "vehicle_status"),
        &FilterValue::Many(vec![Scalar::Int(189636)])
    );
}

#[test]
fn people_scenario_flags_and_titles() {
    let spec = PeopleFilter::default()
        .with_titles(&["Partner".to_string()])
        .with_organization_type("Fonds")
        .executives_only()
        .to_spec();

    assert_eq!(
        entry(&spec, "people_titres"),
        &FilterValue::Many(vec![Scalar::Int(8408)])
    );
    assert_eq!(
        entry(&spec, "people_type_organisation"),
        &FilterValue::Many(vec![Scalar::Int(308)])
    );
    assert_eq!(
        entry(&spec, "ciblage_dirigeants"),
        &FilterValue::One(Scalar::Text("Dirigeants".to_string()))
    );
}

#[test]
fn news_dates_keep_their_own_format_keys() {
    let spec = NewsFilter::default()
        .with_title("levée de fonds")
        .with_date_from("2024-01-01")
        .to_spec();
    assert_eq!(
        spec.to_query_string(),
        "title=lev%C3%A9e%20de%20fonds&date_start=2024-01-01"
    );
}

#[test]
fn builders_are_referentially_transparent() {
    let filter = OperationFilter::default()
        .with_operation_type("LBO")
        .with_sector("Biotechnologies")
        .with_amount_min(10.0);
    assert_eq!(filter.to_spec(), filter.to_spec());
}
