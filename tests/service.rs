use flightish::{Catalog, EstimateService};
use serde_json::{json, Value};
use std::path::Path;

fn csv_service() -> EstimateService {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog");
    EstimateService::new(Catalog::from_csv_path(&dir).unwrap())
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|record| record["title"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_loan_estimate_end_to_end() {
    let response = csv_service().handle(
        "POST",
        "/loan-estimate",
        None,
        br#"{"principal": 10000, "termMonths": 36, "creditBand": "poor"}"#,
    );
    assert_eq!(response.status, 200);
    for field in ["monthlyPayment", "annualRatePercent", "totalRepayment", "totalInterest"] {
        assert!(response.body[field].as_f64().unwrap() > 0.0, "{} missing", field);
    }

    let response = csv_service().handle(
        "POST",
        "/loan-estimate",
        None,
        br#"{"principal": 10000, "termMonths": 36, "creditBand": "platinum"}"#,
    );
    assert_eq!(response.status, 400);
    assert!(response.body["error"].as_str().unwrap().contains("platinum"));
}

#[test]
fn test_insurance_estimate_end_to_end() {
    let response = csv_service().handle(
        "POST",
        "/insurance-estimate",
        None,
        br#"{"basePrice": 59.99, "durationBand": "4-7", "ageBand": "30-39"}"#,
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "adjustedPrice": 59.99 }));

    let response = csv_service().handle(
        "POST",
        "/insurance-estimate",
        None,
        br#"{"basePrice": -1, "durationBand": "4-7", "ageBand": "30-39"}"#,
    );
    assert_eq!(response.status, 400);
}

#[test]
fn test_search_matches_builtin_catalogue() {
    let from_csv = csv_service();
    let builtin = EstimateService::default();
    for query in ["q=engineer", "q=&category=Engineering", "q=CLOUD&category=all", "kind=documents&category=Insurance"] {
        let a = from_csv.handle("GET", "/search", Some(query), b"");
        let b = builtin.handle("GET", "/search", Some(query), b"");
        assert_eq!(a.status, 200);
        assert_eq!(a.body, b.body, "{}", query);
    }
}

#[test]
fn test_search_category_is_exact() {
    let response = csv_service().handle("GET", "/search", Some("category=Engineering"), b"");
    let jobs = response.body.as_array().unwrap();
    assert!(!jobs.is_empty());
    assert!(jobs.iter().all(|job| job["department"] == "Engineering"));

    let response = csv_service().handle("GET", "/search", Some("category=engineering"), b"");
    assert_eq!(titles(&response.body), Vec::<String>::new());
}

#[test]
fn test_plans_default_to_usa() {
    let response = csv_service().handle("GET", "/plans", None, b"");
    assert_eq!(response.status, 200);
    let plans = response.body.as_array().unwrap();
    let prices: Vec<f64> = plans.iter().map(|p| p["adjustedPrice"].as_f64().unwrap()).collect();
    assert_eq!(prices, vec![59.99, 89.99, 159.99]);
    assert_eq!(plans[0]["displayPrice"], "$59.99");
}
