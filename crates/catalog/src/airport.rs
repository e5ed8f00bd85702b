//! Airport records and their query configuration.

use serde::{Deserialize, Serialize};

use crate::collection::CollectionConfig;
use crate::entity::{Entity, Ratings};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Airport {
    #[serde(deserialize_with = "crate::lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub iata_code: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub icao_code: Option<String>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub location: Option<AirportLocation>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub airport_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub is_international: Option<bool>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub capacity: Option<AirportCapacity>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub amenities: Option<AirportAmenities>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub services: Option<Vec<String>>,
    #[serde(deserialize_with = "crate::lenient::nested")]
    pub ratings: Option<Ratings>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirportLocation {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirportCapacity {
    /// Annual passengers, in millions.
    #[serde(deserialize_with = "crate::lenient::number")]
    pub passenger_capacity: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub employee_count: Option<f64>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub terminal_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirportAmenities {
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub free_wifi: Option<bool>,
    #[serde(deserialize_with = "crate::lenient::flag")]
    pub has_lounge: Option<bool>,
}

impl Entity for Airport {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Accessor map for the airport discover list.
pub fn airport_collection() -> CollectionConfig<Airport> {
    CollectionConfig::<Airport>::builder("airports")
        .code_field(|a| a.iata_code.as_deref())
        .code_field(|a| a.icao_code.as_deref())
        .search_field(|a| a.name.as_deref())
        .search_field(|a| a.location.as_ref()?.city.as_deref())
        .search_field(|a| a.location.as_ref()?.country.as_deref())
        .services(|a| a.services.as_deref())
        .range("passengerCapacity", |a| a.capacity?.passenger_capacity)
        .range("employeeCount", |a| a.capacity?.employee_count)
        .range("terminalCount", |a| a.capacity?.terminal_count)
        .boolean("freeWifi", |a| a.amenities?.free_wifi)
        .boolean("hasLounge", |a| a.amenities?.has_lounge)
        .boolean("isInternational", |a| a.is_international)
        .categorical("region", |a| a.location.as_ref()?.region.as_deref())
        .categorical("airportType", |a| a.airport_type.as_deref())
        .service("hasCarRental")
        .service("hasDutyFree")
        .service("hasParking")
        .service("hasVipLounge")
        .service("hasMedicalServices")
        .service_keyword("hasMedicalServices", "medical")
        .min_threshold("minGoogleRating", |a| a.ratings?.google_rating)
        .min_threshold("minSkytraxRating", |a| a.ratings?.skytrax_rating)
        .build()
}
