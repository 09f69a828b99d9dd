use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Treats `""` the same as an absent or `null` value.
pub fn deserialize_empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

/// Accepts either a calendar date (`2010-07-16`) or a full RFC 3339
/// timestamp (`2010-07-16T00:00:00.000Z`) and keeps the date part.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date `{}`", raw)))
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_empty_string_as_none")]
        image: Option<String>,
        #[serde(deserialize_with = "deserialize_date")]
        date: NaiveDate,
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let probe: Probe = serde_json::from_str(r#"{"image": "", "date": "2020-01-02"}"#).unwrap();
        assert_eq!(probe.image, None);

        let probe: Probe = serde_json::from_str(r#"{"image": null, "date": "2020-01-02"}"#).unwrap();
        assert_eq!(probe.image, None);

        let probe: Probe = serde_json::from_str(r#"{"date": "2020-01-02"}"#).unwrap();
        assert_eq!(probe.image, None);
    }

    #[test]
    fn test_image_is_kept() {
        let probe: Probe =
            serde_json::from_str(r#"{"image": "https://i.pravatar.cc/300", "date": "2020-01-02"}"#)
                .unwrap();
        assert_eq!(probe.image.as_deref(), Some("https://i.pravatar.cc/300"));
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2010, 7, 16).unwrap();
        assert_eq!(parse_date("2010-07-16"), Some(expected));
        assert_eq!(parse_date("2010-07-16T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_date("2010-07-16T10:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("July 16th"), None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result: Result<Probe, _> = serde_json::from_str(r#"{"date": "yesterday"}"#);
        assert!(result.is_err());
    }
}
