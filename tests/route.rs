use campo::ui::core::route::{normalize, ParamValue, RouteParams, GRUPO_ID_PARAM};

#[test]
fn single_value_normalizes_to_itself() {
    let value = ParamValue::Single("G1".to_string());
    assert_eq!(normalize(&value), Some("G1"));
}

#[test]
fn collection_normalizes_to_first_element() {
    let value = ParamValue::Multi(vec!["G1".to_string(), "G2".to_string()]);
    assert_eq!(normalize(&value), Some("G1"));

    let one = ParamValue::Multi(vec!["G7".to_string()]);
    assert_eq!(normalize(&one), Some("G7"));
}

#[test]
fn empty_collection_normalizes_to_nothing() {
    let value = ParamValue::Multi(Vec::new());
    assert_eq!(normalize(&value), None);
}

#[test]
fn route_params_first_goes_through_normalization() {
    let mut params = RouteParams::new();
    params.set(
        GRUPO_ID_PARAM,
        ParamValue::Multi(vec!["G1".to_string(), "G2".to_string()]),
    );

    assert_eq!(params.first(GRUPO_ID_PARAM), Some("G1"));
    assert_eq!(params.first("salidaId"), None);
}

#[test]
fn set_replaces_previous_value() {
    let mut params = RouteParams::new();
    params.set(GRUPO_ID_PARAM, ParamValue::Single("G1".to_string()));
    params.set(GRUPO_ID_PARAM, ParamValue::Single("G2".to_string()));

    assert_eq!(params.first(GRUPO_ID_PARAM), Some("G2"));
}
