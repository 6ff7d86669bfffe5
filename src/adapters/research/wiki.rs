//! Wiki Research Adapter - Public-data fallback via Wikipedia and Wikidata.
//!
//! Two independent read-only lookups run concurrently: the Wikipedia intro
//! extract and a Wikidata claims query. Both tolerate missing data by
//! returning nothing rather than failing the caller, so `try_lookup` always
//! succeeds with a best-effort profile.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::domain::profile::{CompanyProfile, CompanySize};
use crate::ports::{CompanyCandidate, CompanyResearch, ResearchError};

const WIKI_API: &str = "https://en.wikipedia.org/w/api.php";
const WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";

/// Maximum entity-search candidates returned.
const SEARCH_LIMIT: &str = "10";

// Wikidata property ids for the structured-facts lookup.
const P_INDUSTRY: &str = "P452";
const P_INCEPTION: &str = "P571";
const P_HEADQUARTERS: &str = "P159";
const P_WEBSITE: &str = "P856";
const P_CEO: &str = "P169";
const P_EMPLOYEES: &str = "P1128";
const P_REVENUE: &str = "P2139";

/// Research client backed by Wikipedia and Wikidata.
pub struct WikiResearch {
    client: Client,
    wiki_api: String,
    wikidata_api: String,
}

/// Structured facts resolved from Wikidata claims.
#[derive(Debug, Default)]
struct WikidataFacts {
    industry: Option<String>,
    founded_year: Option<String>,
    headquarters: Option<String>,
    website: Option<String>,
    ceo: Option<String>,
    employees: Option<String>,
    revenue: Option<String>,
}

impl WikiResearch {
    /// Creates a client against the public APIs.
    pub fn new() -> Self {
        Self::with_endpoints(WIKI_API, WIKIDATA_API)
    }

    /// Creates a client against custom endpoints (used by tests).
    pub fn with_endpoints(wiki_api: impl Into<String>, wikidata_api: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            wiki_api: wiki_api.into(),
            wikidata_api: wikidata_api.into(),
        }
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Option<Value> {
        let response = self.client.get(url).query(params).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json().await.ok()
    }

    /// Fetches the Wikipedia intro extract for a page title.
    async fn fetch_extract(&self, company_name: &str) -> Option<String> {
        let data = self
            .get_json(
                &self.wiki_api,
                &[
                    ("action", "query"),
                    ("titles", company_name),
                    ("prop", "extracts"),
                    ("exintro", "true"),
                    ("explaintext", "true"),
                    ("format", "json"),
                    ("origin", "*"),
                ],
            )
            .await?;

        let pages = data.get("query")?.get("pages")?.as_object()?;
        let page = pages.values().next()?;
        if page.get("missing").is_some() {
            return None;
        }
        let extract = page.get("extract")?.as_str()?;
        if extract.is_empty() {
            None
        } else {
            Some(extract.to_string())
        }
    }

    /// Resolves the best-matching Wikidata entity's structured facts.
    async fn fetch_facts(&self, company_name: &str) -> Option<WikidataFacts> {
        let search = self
            .get_json(
                &self.wikidata_api,
                &[
                    ("action", "wbsearchentities"),
                    ("search", company_name),
                    ("language", "en"),
                    ("limit", "1"),
                    ("format", "json"),
                    ("origin", "*"),
                ],
            )
            .await?;
        let entity_id = search.get("search")?.as_array()?.first()?.get("id")?.as_str()?.to_string();

        let data = self
            .get_json(
                &self.wikidata_api,
                &[
                    ("action", "wbgetentities"),
                    ("ids", entity_id.as_str()),
                    ("props", "claims|labels|descriptions"),
                    ("languages", "en"),
                    ("format", "json"),
                    ("origin", "*"),
                ],
            )
            .await?;
        let claims = data
            .get("entities")?
            .get(entity_id.as_str())?
            .get("claims")?
            .clone();

        let (industry, headquarters, ceo) = futures::join!(
            self.resolve_claim_label(&claims, P_INDUSTRY),
            self.resolve_claim_label(&claims, P_HEADQUARTERS),
            self.resolve_claim_label(&claims, P_CEO),
        );

        Some(WikidataFacts {
            industry,
            founded_year: claim_year(&claims, P_INCEPTION),
            headquarters,
            website: claim_string(&claims, P_WEBSITE),
            ceo,
            employees: claim_amount(&claims, P_EMPLOYEES),
            revenue: claim_amount(&claims, P_REVENUE),
        })
    }

    /// Resolves an entity-valued claim to its English label; a plain string
    /// claim is returned as-is.
    async fn resolve_claim_label(&self, claims: &Value, property: &str) -> Option<String> {
        let value = claim_value(claims, property)?;
        let id = match value.get("id").and_then(|v| v.as_str()) {
            Some(id) => id.to_string(),
            None => return value.as_str().map(str::to_string),
        };

        let data = self
            .get_json(
                &self.wikidata_api,
                &[
                    ("action", "wbgetentities"),
                    ("ids", id.as_str()),
                    ("props", "labels"),
                    ("languages", "en"),
                    ("format", "json"),
                    ("origin", "*"),
                ],
            )
            .await?;
        data.get("entities")?
            .get(id.as_str())?
            .get("labels")?
            .get("en")?
            .get("value")?
            .as_str()
            .map(str::to_string)
    }
}

impl Default for WikiResearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyResearch for WikiResearch {
    async fn try_lookup(&self, company_name: &str) -> Result<CompanyProfile, ResearchError> {
        let (extract, facts) = futures::join!(
            self.fetch_extract(company_name),
            self.fetch_facts(company_name)
        );
        let facts = facts.unwrap_or_default();

        let mut profile = CompanyProfile::named(company_name);
        profile.description =
            extract.unwrap_or_else(|| format!("{} is a company.", company_name));
        profile.industry = facts.industry.unwrap_or_default();
        profile.founded_year = facts.founded_year.unwrap_or_default();
        profile.headquarters = facts.headquarters.unwrap_or_default();
        profile.website = facts.website.unwrap_or_default();
        profile.size = facts
            .employees
            .and_then(|e| e.parse::<u64>().ok())
            .map(CompanySize::from_employee_count);
        profile.revenue = facts
            .revenue
            .as_deref()
            .and_then(format_revenue)
            .unwrap_or_default();
        if let Some(ceo) = facts.ceo {
            profile.key_executives = vec![format!("{} - Chief Executive Officer", ceo)];
        }

        Ok(profile)
    }

    async fn search(&self, query: &str) -> Vec<CompanyCandidate> {
        if query.len() < 2 {
            return Vec::new();
        }

        let Some(data) = self
            .get_json(
                &self.wikidata_api,
                &[
                    ("action", "wbsearchentities"),
                    ("search", query),
                    ("language", "en"),
                    ("limit", SEARCH_LIMIT),
                    ("format", "json"),
                    ("origin", "*"),
                ],
            )
            .await
        else {
            return Vec::new();
        };

        data.get("search")
            .and_then(|v| v.as_array())
            .map(|entities| {
                entities
                    .iter()
                    .map(|entity| CompanyCandidate {
                        name: entity
                            .get("label")
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string(),
                        description: entity
                            .get("description")
                            .and_then(|v| v.as_str())
                            .unwrap_or_default()
                            .to_string(),
                        url: entity
                            .get("id")
                            .and_then(|v| v.as_str())
                            .map(|id| format!("https://www.wikidata.org/wiki/{}", id))
                            .unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The first claim's datavalue for a property.
fn claim_value(claims: &Value, property: &str) -> Option<Value> {
    claims
        .get(property)?
        .as_array()?
        .first()?
        .get("mainsnak")?
        .get("datavalue")?
        .get("value")
        .cloned()
}

fn claim_string(claims: &Value, property: &str) -> Option<String> {
    claim_value(claims, property)?.as_str().map(str::to_string)
}

/// Extracts the 4-digit year from a Wikidata time value like
/// `+1976-04-01T00:00:00Z`.
fn claim_year(claims: &Value, property: &str) -> Option<String> {
    let value = claim_value(claims, property)?;
    let time = value.get("time")?.as_str()?;
    let year = time.strip_prefix('+')?.get(0..4)?;
    if year.chars().all(|c| c.is_ascii_digit()) {
        Some(year.to_string())
    } else {
        None
    }
}

/// Extracts a quantity amount, stripping the leading sign.
fn claim_amount(claims: &Value, property: &str) -> Option<String> {
    let value = claim_value(claims, property)?;
    let amount = value.get("amount")?.as_str()?;
    Some(amount.trim_start_matches('+').to_string())
}

/// Formats a raw revenue amount into a compact dollar figure.
fn format_revenue(amount: &str) -> Option<String> {
    let num = amount.parse::<f64>().ok()?;
    if num >= 1e9 {
        Some(format!("${:.1}B", num / 1e9))
    } else if num >= 1e6 {
        Some(format!("${:.0}M", num / 1e6))
    } else if num >= 1e3 {
        Some(format!("${:.0}K", num / 1e3))
    } else {
        Some(format!("${}", num))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims_with(property: &str, value: Value) -> Value {
        json!({
            property: [{ "mainsnak": { "datavalue": { "value": value } } }]
        })
    }

    #[test]
    fn claim_year_extracts_four_digits() {
        let claims = claims_with(P_INCEPTION, json!({ "time": "+1976-04-01T00:00:00Z" }));
        assert_eq!(claim_year(&claims, P_INCEPTION), Some("1976".to_string()));
    }

    #[test]
    fn claim_year_rejects_malformed_times() {
        let claims = claims_with(P_INCEPTION, json!({ "time": "circa 1976" }));
        assert_eq!(claim_year(&claims, P_INCEPTION), None);
    }

    #[test]
    fn claim_amount_strips_sign() {
        let claims = claims_with(P_EMPLOYEES, json!({ "amount": "+164000", "unit": "1" }));
        assert_eq!(claim_amount(&claims, P_EMPLOYEES), Some("164000".to_string()));
    }

    #[test]
    fn claim_string_reads_plain_values() {
        let claims = claims_with(P_WEBSITE, json!("https://www.example.com"));
        assert_eq!(
            claim_string(&claims, P_WEBSITE),
            Some("https://www.example.com".to_string())
        );
    }

    #[test]
    fn missing_property_yields_none() {
        let claims = json!({});
        assert_eq!(claim_string(&claims, P_WEBSITE), None);
        assert_eq!(claim_year(&claims, P_INCEPTION), None);
        assert_eq!(claim_amount(&claims, P_REVENUE), None);
    }

    #[test]
    fn format_revenue_scales_units() {
        assert_eq!(format_revenue("2100000000"), Some("$2.1B".to_string()));
        assert_eq!(format_revenue("500000000"), Some("$500M".to_string()));
        assert_eq!(format_revenue("75000"), Some("$75K".to_string()));
        assert_eq!(format_revenue("500"), Some("$500".to_string()));
        assert_eq!(format_revenue("not-a-number"), None);
    }
}
