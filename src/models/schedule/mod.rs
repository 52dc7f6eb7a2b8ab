// Schedule module
// Wedding-day itinerary stops shown alongside the map

use serde::{Deserialize, Serialize};

use crate::models::geo::GeoCoordinate;

/// One stop in the wedding-day itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStop {
    pub time: String,
    pub title: String,
    pub location: String,
    pub address: String,
    pub coordinate: GeoCoordinate,
}

impl ScheduleStop {
    pub fn new(
        time: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        address: impl Into<String>,
        coordinate: GeoCoordinate,
    ) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            location: location.into(),
            address: address.into(),
            coordinate,
        }
    }
}

/// The built-in three-stop itinerary: tea ceremony, church ceremony, reception
pub fn default_itinerary() -> Vec<ScheduleStop> {
    vec![
        ScheduleStop::new(
            "6:30 AM",
            "Tea ceremony",
            "Stephanie's house",
            "6 Orchard St, Epping, NSW 2121",
            GeoCoordinate {
                latitude: -33.7667,
                longitude: 151.0833,
            },
        ),
        ScheduleStop::new(
            "12:30 PM",
            "Church ceremony",
            "Saint Brigid's Catholic Church",
            "Livingstone Rd, Marrickville, NSW 2204",
            GeoCoordinate {
                latitude: -33.9133,
                longitude: 151.1553,
            },
        ),
        ScheduleStop::new(
            "6:30 PM",
            "Reception",
            "The Sky Ballroom",
            "Level 3/462 Chapel Rd, Bankstown NSW 2200",
            GeoCoordinate {
                latitude: -33.9198,
                longitude: 151.0346,
            },
        ),
    ]
}
