//! RFC 3339 text for every timestamp that crosses the HTTP boundary.

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

pub fn serialize<S: Serializer>(stamp: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
	match stamp.format(&Rfc3339) {
		Ok(text) => serializer.serialize_str(&text),
		Err(err) => Err(ser::Error::custom(err)),
	}
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
	let text = String::deserialize(deserializer)?;

	OffsetDateTime::parse(&text, &Rfc3339).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
	use time::OffsetDateTime;

	#[derive(serde::Serialize, serde::Deserialize)]
	struct Stamped {
		#[serde(with = "super")]
		at: OffsetDateTime,
	}

	#[test]
	fn round_trips_through_rfc3339_text() {
		let original = Stamped { at: OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap() };
		let json = serde_json::to_string(&original).expect("Failed to serialize stamp.");

		assert!(json.contains("2023-11-14T22:13:20Z"));

		let parsed: Stamped = serde_json::from_str(&json).expect("Failed to parse stamp.");

		assert_eq!(parsed.at, original.at);
	}

	#[test]
	fn rejects_non_rfc3339_text() {
		let result: Result<Stamped, _> = serde_json::from_str(r#"{"at": "14/11/2023"}"#);

		assert!(result.is_err());
	}
}
