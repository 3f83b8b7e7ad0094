use serde::Deserialize;

use crate::shared::lenient::or_default;

/// Timezone metadata as returned by `GET /coordinates/{lat},{lon}`.
///
/// `latitude`/`longitude` are the upstream's textual echo of the query and are
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimezoneRecord {
    #[serde(deserialize_with = "or_default")]
    pub latitude: String,
    #[serde(deserialize_with = "or_default")]
    pub longitude: String,
    #[serde(deserialize_with = "or_default")]
    pub timezone_id: String,
    #[serde(deserialize_with = "or_default")]
    pub offset: i64,
    #[serde(deserialize_with = "or_default")]
    pub country_code: String,
    #[serde(deserialize_with = "or_default")]
    pub map_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lenient::decode_body;

    #[test]
    fn test_decode_coordinates_payload() {
        let body = br#"{
            "latitude": "37.795517",
            "longitude": "-122.393693",
            "timezone_id": "America/Los_Angeles",
            "offset": -7,
            "country_code": "US",
            "map_url": "https://maps.google.com/maps?q=37.795517,-122.393693&z=4"
        }"#;

        let timezone: TimezoneRecord = decode_body(body);

        assert_eq!(timezone.latitude, "37.795517");
        assert_eq!(timezone.timezone_id, "America/Los_Angeles");
        assert_eq!(timezone.offset, -7);
        assert_eq!(timezone.country_code, "US");
        assert!(timezone.map_url.starts_with("https://maps.google.com"));
    }

    #[test]
    fn test_numeric_coordinate_echo_is_not_an_error() {
        let body = br#"{"latitude":10.5,"longitude":20.5,"timezone_id":"Europe/Paris"}"#;

        let timezone: TimezoneRecord = decode_body(body);

        assert_eq!(timezone.latitude, "");
        assert_eq!(timezone.longitude, "");
        assert_eq!(timezone.timezone_id, "Europe/Paris");
        assert_eq!(timezone.offset, 0);
    }
}
