/*!
Spawn-config codec.

The client cannot pass structured data through the generic spawn primitive,
so the `{id, options}` payload rides inside the feature string: one
`config=<base64(JSON)>` entry in the comma-separated `key=value` list. The
standard base64 alphabet contains neither `,` nor `=` (padding aside), and
the parser splits each entry on the first `=` only, so the token never
collides with the feature-delimiter syntax.
*/

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::{DecodeError, SpawnConfig, WindowId};

/// Feature key carrying the encoded spawn configuration.
pub const CONFIG_KEY: &str = "config";

/// Sentinel navigation target for auxiliary-window spawns. Anything else
/// is an ordinary external link, never an auxiliary window.
pub const BLANK_TARGET: &str = "about:blank";

/// Encode a config into a single feature entry (`config=<token>`).
///
/// The token is safe to concatenate with other `key=value` feature flags
/// on the same spawn request.
pub fn encode(config: &SpawnConfig) -> String {
  let json = serde_json::json!({ "id": config.id, "options": config.options }).to_string();
  format!("{CONFIG_KEY}={}", STANDARD.encode(json))
}

/// Parse a feature string back into a `SpawnConfig`.
///
/// Failure is terminal for the spawn attempt: the caller must deny the
/// request and must not register a handle for it.
pub fn decode(features: &str) -> Result<SpawnConfig, DecodeError> {
  let token = features
    .split(',')
    .filter_map(|entry| entry.trim().split_once('='))
    .find_map(|(key, value)| (key == CONFIG_KEY).then_some(value))
    .ok_or(DecodeError::MalformedFeatureString)?;

  let bytes = STANDARD
    .decode(token)
    .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;
  let value: serde_json::Value =
    serde_json::from_slice(&bytes).map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;

  validate(value)
}

/// Shape check: `{id: string, options: object}`. Keys inside `options`
/// are opaque and pass through untouched.
fn validate(value: serde_json::Value) -> Result<SpawnConfig, DecodeError> {
  let serde_json::Value::Object(mut map) = value else {
    return Err(DecodeError::SchemaViolation("config is not an object".into()));
  };

  let id = match map.remove("id") {
    Some(serde_json::Value::String(id)) => WindowId::from(id),
    Some(_) => return Err(DecodeError::SchemaViolation("id is not a string".into())),
    None => return Err(DecodeError::SchemaViolation("missing id".into())),
  };

  let options = match map.remove("options") {
    Some(serde_json::Value::Object(options)) => options,
    Some(_) => return Err(DecodeError::SchemaViolation("options is not an object".into())),
    None => return Err(DecodeError::SchemaViolation("missing options".into())),
  };

  Ok(SpawnConfig { id, options })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::OptionsMap;

  fn sample_config() -> SpawnConfig {
    let mut options = OptionsMap::new();
    options.insert("width".to_owned(), serde_json::json!(800));
    options.insert("height".to_owned(), serde_json::json!(800));
    options.insert("frame".to_owned(), serde_json::json!(true));
    SpawnConfig {
      id: WindowId::from("w1"),
      options,
    }
  }

  mod encode {
    use super::*;

    #[test]
    fn produces_single_config_entry() {
      let features = encode(&sample_config());
      assert!(features.starts_with("config="));
    }

    #[test]
    fn token_avoids_feature_delimiters() {
      let features = encode(&sample_config());
      assert!(
        !features.contains(','),
        "token must not collide with the feature separator"
      );
      let value = features.split_once('=').map(|(_, v)| v).unwrap_or_default();
      assert!(
        !value.trim_end_matches('=').contains('='),
        "only trailing padding may contain '='"
      );
    }

    #[test]
    fn empty_options_encode() {
      let config = SpawnConfig {
        id: WindowId::from("bare"),
        options: OptionsMap::new(),
      };
      assert_eq!(decode(&encode(&config)), Ok(config));
    }
  }

  mod decode {
    use super::*;

    #[test]
    fn round_trip() {
      let config = sample_config();
      assert_eq!(decode(&encode(&config)), Ok(config));
    }

    #[test]
    fn ignores_other_feature_entries() {
      let features = format!("frame=true,{},width=800", encode(&sample_config()));
      assert_eq!(decode(&features), Ok(sample_config()));
    }

    #[test]
    fn tolerates_whitespace_between_entries() {
      let features = format!("frame=true, {} , width=800", encode(&sample_config()));
      assert_eq!(decode(&features), Ok(sample_config()));
    }

    #[test]
    fn missing_config_key_is_malformed() {
      assert_eq!(
        decode("width=800,height=600"),
        Err(DecodeError::MalformedFeatureString)
      );
    }

    #[test]
    fn empty_feature_string_is_malformed() {
      assert_eq!(decode(""), Err(DecodeError::MalformedFeatureString));
    }

    #[test]
    fn entries_without_equals_are_skipped() {
      assert_eq!(
        decode("fullscreen,resizable"),
        Err(DecodeError::MalformedFeatureString)
      );
    }

    #[test]
    fn invalid_base64_is_invalid_encoding() {
      assert!(matches!(
        decode("config=!!not-base64!!"),
        Err(DecodeError::InvalidEncoding(_))
      ));
    }

    #[test]
    fn non_json_payload_is_invalid_encoding() {
      let token = STANDARD.encode("definitely not json");
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::InvalidEncoding(_))
      ));
    }

    #[test]
    fn non_object_config_is_schema_violation() {
      let token = STANDARD.encode("[1,2,3]");
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::SchemaViolation(_))
      ));
    }

    #[test]
    fn missing_id_is_schema_violation() {
      let token = STANDARD.encode(r#"{"options":{}}"#);
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::SchemaViolation(_))
      ));
    }

    #[test]
    fn non_string_id_is_schema_violation() {
      let token = STANDARD.encode(r#"{"id":42,"options":{}}"#);
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::SchemaViolation(_))
      ));
    }

    #[test]
    fn scalar_options_is_schema_violation() {
      let token = STANDARD.encode(r#"{"id":"w1","options":"800x600"}"#);
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::SchemaViolation(_))
      ));
    }

    #[test]
    fn missing_options_is_schema_violation() {
      let token = STANDARD.encode(r#"{"id":"w1"}"#);
      assert!(matches!(
        decode(&format!("config={token}")),
        Err(DecodeError::SchemaViolation(_))
      ));
    }
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use crate::types::OptionsMap;
  use proptest::prelude::*;

  /// Strategy for JSON-compatible option values.
  fn option_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
      any::<bool>().prop_map(serde_json::Value::from),
      any::<i64>().prop_map(serde_json::Value::from),
      "[a-zA-Z0-9 ,=_-]{0,24}".prop_map(serde_json::Value::from),
    ]
  }

  fn options() -> impl Strategy<Value = OptionsMap> {
    prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9_]{0,15}", option_value(), 0..8)
      .prop_map(|entries| entries.into_iter().collect())
  }

  proptest! {
    /// decode(encode(config)) == config for all valid configs.
    #[test]
    fn round_trip(id in ".{0,32}", options in options()) {
      let config = SpawnConfig { id: WindowId(id), options };
      prop_assert_eq!(decode(&encode(&config)), Ok(config));
    }

    /// The token survives being embedded among arbitrary sibling features.
    #[test]
    fn round_trip_with_sibling_features(
      id in "[a-zA-Z0-9_-]{1,16}",
      options in options(),
      // Sibling keys stay under six characters so none can spell "config".
      prefix in "[a-z]{1,5}=[a-z0-9]{0,8}",
      suffix in "[a-z]{1,5}=[a-z0-9]{0,8}",
    ) {
      let config = SpawnConfig { id: WindowId(id), options };
      let features = format!("{prefix},{},{suffix}", encode(&config));
      prop_assert_eq!(decode(&features), Ok(config));
    }
  }
}
