//! Airline records and their query configuration.

use serde::{Deserialize, Serialize};

use crate::collection::CollectionConfig;
use crate::entity::{Entity, Ratings};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airline {
    #[serde(deserialize_with = "crate::lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub iata_code: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub icao_code: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub callsign: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub region: Option<String>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub headquarters: Option<Headquarters>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub business_model: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub business_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub alliance: Option<String>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub is_low_cost: Option<bool>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub fleet: Option<Fleet>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub employee_count: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub founded_year: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub amenities: Option<AirlineAmenities>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub services: Option<Vec<String>>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub ratings: Option<Ratings>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Headquarters {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fleet {
    #[serde(deserialize_with = "crate::lenient::number")]
    pub size: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub average_age: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirlineAmenities {
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub free_wifi: Option<bool>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub has_frequent_flyer: Option<bool>,
}

impl Entity for Airline {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Accessor map for the airline discover list.
pub fn airline_collection() -> CollectionConfig<Airline> {
    CollectionConfig::<Airline>::builder("airlines")
        .code_field(|a| a.iata_code.as_deref())
        .code_field(|a| a.icao_code.as_deref())
        .search_field(|a| a.name.as_deref())
        .search_field(|a| a.callsign.as_deref())
        .search_field(|a| a.country.as_deref())
        .search_field(|a| a.headquarters.as_ref()?.city.as_deref())
        .services(|a| a.services.as_deref())
        .range("fleetSize", |a| a.fleet?.size)
        .range("fleetAge", |a| a.fleet?.average_age)
        .range("employeeCount", |a| a.employee_count)
        .range("foundedYear", |a| a.founded_year)
        .boolean("freeWifi", |a| a.amenities?.free_wifi)
        .boolean("hasFrequentFlyer", |a| a.amenities?.has_frequent_flyer)
        .boolean("isLowCost", |a| a.is_low_cost)
        .categorical("region", |a| a.region.as_deref())
        .categorical("businessModel", |a| a.business_model.as_deref())
        .categorical("businessType", |a| a.business_type.as_deref())
        .categorical("alliance", |a| a.alliance.as_deref())
        .service("hasLoungeAccess")
        .service("hasInflightEntertainment")
        .service("hasExtraLegroom")
        .service_keyword("hasInflightEntertainment", "entertainment")
        .service_keyword("hasExtraLegroom", "legroom")
        .min_threshold("minGoogleRating", |a| a.ratings?.google_rating)
        .min_threshold("minSkytraxRating", |a| a.ratings?.skytrax_rating)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{evaluate, QueryState};
    use crate::entity::{FilterKind, FilterValue};

    fn records() -> Vec<Option<Airline>> {
        serde_json::from_str(
            r#"[
                {"id": "px", "callsign": "NIUGINI",
                 "headquarters": {"city": "Port Moresby"},
                 "services": ["Legroom Plus"]},
                {"id": "ie", "name": "Solomon Airlines", "callsign": "SOLOMON",
                 "headquarters": {"city": "Honiara"},
                 "services": ["Lounge Access"]}
            ]"#,
        )
        .expect("parse")
    }

    fn run(state: &QueryState) -> Vec<String> {
        let records = records();
        evaluate(&records, state, &airline_collection(), 20)
            .paginated_items
            .iter()
            .map(|airline| airline.id.clone())
            .collect()
    }

    fn searched(term: &str) -> Vec<String> {
        let mut state = QueryState::new(1);
        state.debounced_search_term = term.to_string();
        run(&state)
    }

    fn filtered(key: &str, value: FilterValue) -> Vec<String> {
        let mut state = QueryState::new(1);
        state.filters.insert(key.to_string(), value);
        run(&state)
    }

    #[test]
    fn deserializes_nested_record() {
        let airline: Airline = serde_json::from_str(
            r#"{
                "id": "px",
                "name": "Air Niugini",
                "iataCode": "PX",
                "fleet": {"size": 22},
                "headquarters": {"city": "Port Moresby"},
                "ratings": {"googleRating": 3.9}
            }"#,
        )
        .expect("parse");
        assert_eq!(airline.id(), "px");
        assert_eq!(airline.fleet.and_then(|f| f.size), Some(22.0));
        assert_eq!(
            airline.headquarters.and_then(|h| h.city).as_deref(),
            Some("Port Moresby")
        );
        assert_eq!(airline.ratings.and_then(|r| r.skytrax_rating), None);
    }

    #[test]
    fn declares_alliance_and_business_filters() {
        let config = airline_collection();
        for key in ["alliance", "businessModel", "businessType", "region"] {
            assert_eq!(config.filter_kind(key), Some(FilterKind::CategoricalExact));
        }
        assert_eq!(config.filter_kind("fleetSize"), Some(FilterKind::Range));
        assert_eq!(
            config.filter_kind("hasExtraLegroom"),
            Some(FilterKind::ServiceMembership)
        );
    }

    #[test]
    fn searches_callsign_and_headquarters_city() {
        assert_eq!(searched("niugini"), vec!["px"]);
        assert_eq!(searched("honiara"), vec!["ie"]);
        assert_eq!(searched("moresby"), vec!["px"]);
    }

    #[test]
    fn legroom_keyword_matches_listed_service() {
        assert_eq!(filtered("hasExtraLegroom", true.into()), vec!["px"]);
        assert_eq!(filtered("hasLoungeAccess", true.into()), vec!["ie"]);
    }
}
