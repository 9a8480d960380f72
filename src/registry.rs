//! Case-registry HTTP adapter.
//!
//! Fetches the candidate pool from the external case registry and maps its
//! wire records onto [`Case`] values. Records without coordinates are
//! dropped here, at the boundary, so that the algorithm only ever sees
//! locatable cases.

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::model::{Address, Case, CaseId};
use crate::pool::filter_postal_ranges;
use crate::traits::{CaseQuery, CaseSource};

/// Registry page size. One page covers a full working set; the registry
/// is queried per generation call, not paginated through.
const PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Bearer token forwarded on every request, if the registry needs one.
    pub auth_token: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 60,
            auth_token: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl CaseSource for RegistryClient {
    fn fetch_eligible_cases(&self, query: &CaseQuery) -> Result<Vec<Case>> {
        let url = format!("{}/cases/", self.config.base_url);

        let mut params: Vec<(&str, String)> = vec![("page_size", PAGE_SIZE.to_string())];
        if query.open_cases_only {
            params.push(("open_cases", "true".to_string()));
        }
        if let Some(theme) = query.theme {
            params.push(("theme", theme.to_string()));
        }
        if let Some(visit_from) = &query.visit_from {
            params.push(("schedule_visit_from", visit_from.clone()));
        }

        let mut request = self.client.get(url).query(&params);
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let body: CaseListResponse = request.send()?.error_for_status()?.json()?;
        let fetched = body.results.len();
        let cases: Vec<Case> = body
            .results
            .into_iter()
            .filter_map(CaseRecord::into_case)
            .collect();
        if cases.len() < fetched {
            warn!(
                dropped = fetched - cases.len(),
                "dropped registry cases without coordinates"
            );
        }
        info!(count = cases.len(), "fetched cases from registry");

        filter_postal_ranges(cases, &query.postal_code_ranges)
    }
}

#[derive(Debug, Deserialize)]
struct CaseListResponse {
    #[serde(default)]
    results: Vec<CaseRecord>,
}

#[derive(Debug, Deserialize)]
struct CaseRecord {
    id: u64,
    address: AddressRecord,
    #[serde(default)]
    schedules: Vec<ScheduleRecord>,
}

impl CaseRecord {
    fn into_case(self) -> Option<Case> {
        let (Some(lat), Some(lng)) = (self.address.lat, self.address.lng) else {
            return None;
        };
        let priority_weight = self
            .schedules
            .first()
            .and_then(|schedule| schedule.priority.as_ref())
            .map_or(0.0, |priority| priority.weight);
        let street_number = match self.address.number {
            Some(NumberField::Int(number)) => number.to_string(),
            Some(NumberField::Text(number)) => number,
            None => String::new(),
        };

        let mut case = Case::new(
            CaseId::from(self.id),
            Address::new(self.address.street_name, street_number, self.address.postal_code),
            crate::geo::LatLng::new(lat, lng),
        );
        case.priority_weight = priority_weight;
        Some(case)
    }
}

/// The registry's house number field is numeric for plain numbers and a
/// string for anything historical. Unit suffixes arrive in a separate
/// field and are not part of the address identity, so they are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberField {
    Int(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct AddressRecord {
    #[serde(default)]
    street_name: String,
    #[serde(default)]
    number: Option<NumberField>,
    #[serde(default)]
    postal_code: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    #[serde(default)]
    priority: Option<PriorityRecord>,
}

#[derive(Debug, Deserialize)]
struct PriorityRecord {
    #[serde(default)]
    weight: f64,
}
