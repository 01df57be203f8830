//! HTTP routing for the estimator endpoints
//!
//! Transport independent: takes method, path, query string and body, and
//! returns a status code with a JSON body. The Lambda handler adapts this to
//! Function URL requests.
//!
//! Routes:
//! - `POST /loan-estimate`       {principal, termMonths, creditBand}
//! - `POST /insurance-estimate`  {basePrice, durationBand, ageBand}
//! - `GET  /search?q=&category=&kind=jobs|documents`
//! - `GET  /plans?region=&currency=&duration=&age=`

use crate::catalog::{filter_records, Catalog, ALL_CATEGORIES};
use crate::error::QuoteError;
use crate::insurance::{quote_plans, AgeBand, DurationBand, InsuranceQuoteRequest};
use crate::loans::LoanQuoteRequest;
use crate::region::{Currency, Region, RegionSettings};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Status code plus JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Value,
}

impl ServiceResponse {
    fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, &format!("Failed to encode response: {}", e)),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        if status >= 500 {
            log::error!("{} {}", status, message);
        } else {
            log::warn!("{} {}", status, message);
        }
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    fn empty() -> Self {
        Self {
            status: 200,
            body: Value::Null,
        }
    }
}

impl From<QuoteError> for ServiceResponse {
    fn from(err: QuoteError) -> Self {
        ServiceResponse::error(400, &err.to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoanEstimateBody {
    principal: f64,
    term_months: u32,
    credit_band: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsuranceEstimateBody {
    base_price: f64,
    duration_band: String,
    age_band: String,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SearchKind {
    #[default]
    Jobs,
    Documents,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    kind: SearchKind,
}

#[derive(Debug, Deserialize)]
struct PlanParams {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    age: Option<String>,
}

/// Request router over a loaded catalogue
#[derive(Debug, Clone)]
pub struct EstimateService {
    catalog: Catalog,
}

impl EstimateService {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Route a single request
    pub fn handle(&self, method: &str, path: &str, query: Option<&str>, body: &[u8]) -> ServiceResponse {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        log::debug!("{} {}", method, path);

        if method.eq_ignore_ascii_case("OPTIONS") {
            return ServiceResponse::empty();
        }

        let expected = match path {
            "/loan-estimate" | "/insurance-estimate" => "POST",
            "/search" | "/plans" => "GET",
            _ => return ServiceResponse::error(404, &format!("No route for {}", path)),
        };
        if !method.eq_ignore_ascii_case(expected) {
            return ServiceResponse::error(405, &format!("{} requires {}", path, expected));
        }

        match path {
            "/loan-estimate" => self.loan_estimate(body),
            "/insurance-estimate" => self.insurance_estimate(body),
            "/search" => self.search(query.unwrap_or("")),
            _ => self.plans(query.unwrap_or("")),
        }
    }

    fn loan_estimate(&self, body: &[u8]) -> ServiceResponse {
        let body: LoanEstimateBody = match parse_json(body) {
            Ok(b) => b,
            Err(response) => return response,
        };
        match LoanQuoteRequest::parse(body.principal, body.term_months, &body.credit_band)
            .and_then(|request| request.estimate())
        {
            Ok(quote) => ServiceResponse::ok(&quote),
            Err(e) => e.into(),
        }
    }

    fn insurance_estimate(&self, body: &[u8]) -> ServiceResponse {
        let body: InsuranceEstimateBody = match parse_json(body) {
            Ok(b) => b,
            Err(response) => return response,
        };
        match InsuranceQuoteRequest::parse(body.base_price, &body.duration_band, &body.age_band)
            .and_then(|request| request.quote())
        {
            Ok(quote) => ServiceResponse::ok(&quote),
            Err(e) => e.into(),
        }
    }

    fn search(&self, query: &str) -> ServiceResponse {
        let params: SearchParams = match serde_urlencoded::from_str(query) {
            Ok(p) => p,
            Err(e) => return ServiceResponse::error(400, &format!("Invalid query string: {}", e)),
        };

        match params.kind {
            SearchKind::Jobs => {
                let matches: Vec<_> = filter_records(&self.catalog.jobs, &params.q, &params.category).collect();
                ServiceResponse::ok(&matches)
            }
            SearchKind::Documents => {
                let matches: Vec<_> =
                    filter_records(&self.catalog.documents, &params.q, &params.category).collect();
                ServiceResponse::ok(&matches)
            }
        }
    }

    fn plans(&self, query: &str) -> ServiceResponse {
        let params: PlanParams = match serde_urlencoded::from_str(query) {
            Ok(p) => p,
            Err(e) => return ServiceResponse::error(400, &format!("Invalid query string: {}", e)),
        };

        let region = params
            .region
            .as_deref()
            .map(Region::from_name_or_default)
            .unwrap_or(Region::Usa);
        let mut settings = RegionSettings::new(region);
        if let Some(code) = params.currency.as_deref() {
            match code.parse::<Currency>() {
                Ok(currency) => settings.set_currency(currency),
                Err(e) => return ServiceResponse::error(400, &e),
            }
        }

        let duration = match params.duration.as_deref().map(str::parse::<DurationBand>) {
            None => DurationBand::Days4To7,
            Some(Ok(band)) => band,
            Some(Err(e)) => return e.into(),
        };
        let age = match params.age.as_deref().map(str::parse::<AgeBand>) {
            None => AgeBand::Age30To39,
            Some(Ok(band)) => band,
            Some(Err(e)) => return e.into(),
        };

        match quote_plans(&settings, duration, age) {
            Ok(quotes) => ServiceResponse::ok(&quotes),
            Err(e) => e.into(),
        }
    }
}

impl Default for EstimateService {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceResponse> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };
    serde_json::from_slice(body).map_err(|e| ServiceResponse::error(400, &format!("Invalid JSON: {}", e)))
}
