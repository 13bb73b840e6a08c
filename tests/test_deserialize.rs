use pretty_assertions::assert_eq;
use queryoptions::{Config, Error, PaginationStrategy};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn deserialize_empty() {
    let options = queryoptions::from_str("").unwrap();
    assert!(options.filter.is_empty());
    assert!(options.page.is_empty());
    assert!(options.sort.is_empty());
    assert!(options.fields.is_empty());
    assert_eq!(options.raw_querystring(), "");
    assert_eq!(options.pagination_strategy(), None);
}

#[test]
fn deserialize_multiple_filters() {
    let options = queryoptions::from_str("filter[fieldA]=value1&filter[fieldB]=value2").unwrap();
    assert_eq!(options.filter.len(), 2);
    assert_eq!(options.filter["fieldA"], strings(&["value1"]));
    assert_eq!(options.filter["fieldB"], strings(&["value2"]));
    assert!(options.page.is_empty());
    assert!(options.sort.is_empty());
}

#[test]
fn deserialize_comma_separated_filter() {
    let options = queryoptions::from_str("filter[fieldA]=value1,value2").unwrap();
    assert_eq!(options.filter.len(), 1);
    assert_eq!(options.filter["fieldA"], strings(&["value1", "value2"]));
}

#[test]
fn deserialize_filter_with_spaced_commas() {
    let options = queryoptions::from_str("filter[city]=Paris%2C%20Rome%20%2CNew%20York").unwrap();
    assert_eq!(options.filter["city"], strings(&["Paris", "Rome", "New York"]));
}

#[test]
fn deserialize_empty_filter_value() {
    let options = queryoptions::from_str("filter[x]=").unwrap();
    assert_eq!(options.filter.len(), 1);
    assert_eq!(options.filter["x"], strings(&[""]));
}

#[test]
fn deserialize_drops_valueless_terms() {
    let options =
        queryoptions::from_str("filter[test]=value&filter[empty]&filter[other]=test").unwrap();
    assert_eq!(options.filter.len(), 2);
    assert_eq!(options.filter["test"], strings(&["value"]));
    assert_eq!(options.filter["other"], strings(&["test"]));
    assert!(!options.contains_filter_field("empty"));
}

#[test]
fn deserialize_drops_valueless_page_term() {
    let options = queryoptions::from_str("page[offset]&page[limit]=10").unwrap();
    assert_eq!(options.page.len(), 1);
    assert_eq!(options.page["limit"], 10);
}

#[test]
fn deserialize_page() {
    let options = queryoptions::from_str("page[limit]=10&page[offset]=0x10").unwrap();
    assert_eq!(options.page["limit"], 10);
    assert_eq!(options.page["offset"], 16);
    assert_eq!(options.pagination_strategy(), Some(PaginationStrategy::Offset));
}

#[test]
fn deserialize_page_size() {
    let options = queryoptions::from_str("page[size]=20&page[page]=2").unwrap();
    assert_eq!(options.pagination_strategy(), Some(PaginationStrategy::PageSize));
}

#[test]
fn deserialize_page_without_sizing_key() {
    let options = queryoptions::from_str("filter[a]=b&page[offset]=100").unwrap();
    assert_eq!(options.page["offset"], 100);
    assert_eq!(options.pagination_strategy(), None);
    assert_eq!(options.next(), "");
}

#[test]
fn deserialize_non_integer_page() {
    let err = queryoptions::from_str("page[limit]=abc").unwrap_err();
    assert!(matches!(err, Error::InvalidPageValue { .. }), "got: {err}");
    assert_eq!(err.to_string(), "invalid value for page[limit]: 'abc'");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn deserialize_nested_hierarchy() {
    let err = queryoptions::from_str(
        "filter[mandatory][exact][fieldA]=value1&filter[mandatory][exact][fieldB]=value2",
    )
    .unwrap_err();
    assert!(matches!(err, Error::NestedHierarchy { .. }), "got: {err}");
}

#[test]
fn deserialize_malformed_encoding() {
    let err = queryoptions::from_str("filter[a]=%zz").unwrap_err();
    assert!(matches!(err, Error::InvalidEncoding { position: 10 }), "got: {err}");
}

#[test]
fn deserialize_sort() {
    let options = queryoptions::from_str("sort=fieldA").unwrap();
    assert_eq!(options.sort, strings(&["fieldA"]));

    let options = queryoptions::from_str("sort=fieldA&sort=fieldB&sort=fieldC").unwrap();
    assert_eq!(options.sort, strings(&["fieldA", "fieldB", "fieldC"]));

    let options = queryoptions::from_str("sort=fieldA,fieldB&sort=-fieldC").unwrap();
    assert_eq!(options.sort, strings(&["fieldA", "fieldB", "-fieldC"]));
}

#[test]
fn deserialize_sort_prefixes_are_kept() {
    let options = queryoptions::from_str("sort=-a,%2Bb,%3C%3Dc,!%3Dd").unwrap();
    assert_eq!(options.sort, strings(&["-a", "+b", "<=c", "!=d"]));
    for field in ["a", "b", "c", "d"] {
        assert!(options.contains_sort_field(field), "{field}");
    }
}

#[test]
fn deserialize_literal_plus_sort_prefix() {
    let options = queryoptions::from_str("sort=+name,-age").unwrap();
    assert_eq!(options.sort, strings(&["+name", "-age"]));
    assert!(options.contains_sort_field("name"));
    assert!(options.contains_sort_field("age"));

    let options = queryoptions::from_str("filter[q]=big+band&sort=+year").unwrap();
    assert_eq!(options.filter["q"], vec!["big band"]);
    assert_eq!(options.sort, strings(&["+year"]));
}

#[test]
fn deserialize_fields() {
    let options = queryoptions::from_str("fields=fieldA,-fieldB&fields=fieldC").unwrap();
    assert_eq!(options.fields, strings(&["fieldA", "-fieldB", "fieldC"]));
    assert!(options.contains_field("fieldC"));
    assert!(!options.contains_field("fieldB"));
}

#[test]
fn deserialize_filters_and_fields() {
    let options = queryoptions::from_str("filter[fieldB]=value1&fields=fieldA,fieldB").unwrap();
    assert_eq!(options.filter["fieldB"], strings(&["value1"]));
    assert_eq!(options.fields, strings(&["fieldA", "fieldB"]));
}

#[test]
fn deserialize_url_encoded() {
    let options = queryoptions::from_str("page%5Blimit%5D=10&page%5Boffset%5D=10").unwrap();
    assert_eq!(options.page["limit"], 10);
    assert_eq!(options.page["offset"], 10);
    assert_eq!(options.raw_querystring(), "page[limit]=10&page[offset]=10");
}

#[test]
fn deserialize_comparison_filters() {
    let options = queryoptions::from_str(
        "filter[iVal1]=%3C4&filter[iVal2]=%3C%3D3&filter[iVal3]=%3E1&filter[iVal4]=%3E%3D2",
    )
    .unwrap();
    assert_eq!(options.filter["iVal1"], strings(&["<4"]));
    assert_eq!(options.filter["iVal2"], strings(&["<=3"]));
    assert_eq!(options.filter["iVal3"], strings(&[">1"]));
    assert_eq!(options.filter["iVal4"], strings(&[">=2"]));
    assert_eq!(
        options.raw_querystring(),
        "filter[iVal1]=<4&filter[iVal2]=<=3&filter[iVal3]=>1&filter[iVal4]=>=2"
    );
}

#[test]
fn deserialize_ignores_unknown_parameters() {
    let options = queryoptions::from_str("include=author&filter[a]=b&sort[x]=y&q").unwrap();
    assert_eq!(options.filter.len(), 1);
    assert!(options.sort.is_empty());
}

#[test]
fn deserialize_plus() {
    let options = queryoptions::from_str("filter[name]=John+Smith").unwrap();
    assert_eq!(options.filter["name"], strings(&["John Smith"]));

    let options = Config::new()
        .plus_as_space(false)
        .decode("filter[name]=John+Smith")
        .unwrap();
    assert_eq!(options.filter["name"], strings(&["John+Smith"]));
}

#[test]
fn deserialize_from_str_trait() {
    let options: queryoptions::Options = "filter[a]=1&page[size]=5".parse().unwrap();
    assert_eq!(options.filter["a"], strings(&["1"]));
    assert!("page[size]=five".parse::<queryoptions::Options>().is_err());
}
