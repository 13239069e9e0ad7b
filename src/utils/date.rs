pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.naive_utc())
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        Utc.from_utc_datetime(&t).to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, Utc};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_round_trip_timestamps() {
        let stamped = Stamped { at: Utc::now().naive_utc() };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(stamped, parsed);
    }

    #[tokio::test]
    async fn test_should_emit_rfc3339_strings() {
        let stamped = Stamped { at: Utc::now().naive_utc() };
        let json = serde_json::to_value(&stamped).expect("should serialize");
        let text = json["at"].as_str().expect("should be a string");
        assert!(text.contains('T'));
        assert!(text.ends_with("+00:00"));
    }
}
