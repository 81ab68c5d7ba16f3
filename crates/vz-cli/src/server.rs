use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use vz_core::{
    NormalizeError, NormalizeOptions, Normalizer, NumberSubstitution, PronounceOptions,
    nice_number, pronounce_number, to_mixed_fraction,
};
use vz_store::Config;

/// MCP server exposing the verbalizer. Stateless apart from the loaded
/// config, which supplies defaults for any parameter a call leaves out.
#[derive(Clone)]
pub struct VzServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl VzServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    fn denominators<'a>(&'a self, requested: &'a Option<Vec<u32>>) -> Result<&'a [u32], McpError> {
        let denominators = match requested {
            Some(d) if !d.is_empty() => d.as_slice(),
            _ => self.config.denominators.as_slice(),
        };
        if denominators.contains(&0) {
            return Err(McpError::invalid_params(
                "denominators must be positive",
                None,
            ));
        }
        Ok(denominators)
    }
}

fn json_result(value: serde_json::Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&value).unwrap_or_default(),
    )])
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct PronounceRequest {
    /// The number to speak
    value: f64,
    /// Maximum decimal places to speak (default from config, normally 2)
    places: Option<usize>,
    /// Use the short scale where billion = 10^9. False selects the long
    /// scale where billion = 10^12.
    short_scale: Option<bool>,
    /// Speak the number in scientific notation
    scientific: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FractionRequest {
    /// The number to approximate
    value: f64,
    /// Candidate denominators in priority order. Omit for the configured set.
    denominators: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NiceNumberRequest {
    /// The number to format
    value: f64,
    /// Phrase for speech ("4 and a half") instead of display ("4 1/2")
    #[serde(default)]
    speech: bool,
    /// Candidate denominators in priority order. Omit for the configured set.
    denominators: Option<Vec<u32>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NormalizeRequest {
    /// English text to normalize
    text: String,
    /// Drop "the", "a" and "an"
    remove_articles: Option<bool>,
    /// Only replace spoken numbers that stand as whole words
    whole_word: Option<bool>,
}

#[tool_router]
impl VzServer {
    #[tool(
        description = "Speak a number in English words, e.g. 1234 -> \"one thousand, two hundred and thirty four\". Supports the short and long scales, a decimal place limit, and scientific notation."
    )]
    async fn vz_pronounce(
        &self,
        Parameters(req): Parameters<PronounceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let defaults = self.config.pronounce;
        let opts = PronounceOptions {
            places: req.places.unwrap_or(defaults.places),
            short_scale: req.short_scale.unwrap_or(defaults.short_scale),
            scientific: req.scientific.unwrap_or(defaults.scientific),
        };
        let text = pronounce_number(req.value, &opts);
        tracing::debug!(value = req.value, "pronounced");

        Ok(json_result(serde_json::json!({ "text": text })))
    }

    #[tool(
        description = "Approximate a number as a mixed fraction (whole, numerator, denominator) using the first candidate denominator within 0.01. Returns fraction: null when nothing fits."
    )]
    async fn vz_fraction(
        &self,
        Parameters(req): Parameters<FractionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let denominators = self.denominators(&req.denominators)?;
        let result = match to_mixed_fraction(req.value, denominators) {
            Some(m) => serde_json::json!({ "fraction": m }),
            None => serde_json::json!({ "fraction": null }),
        };
        Ok(json_result(result))
    }

    #[tool(
        description = "Format a number as a friendly mixed fraction for display (\"4 1/2\") or speech (\"4 and a half\"). Falls back to the number rounded to three decimals."
    )]
    async fn vz_nice_number(
        &self,
        Parameters(req): Parameters<NiceNumberRequest>,
    ) -> Result<CallToolResult, McpError> {
        let denominators = self.denominators(&req.denominators)?;
        let text = nice_number(req.value, req.speech, denominators);
        Ok(json_result(serde_json::json!({ "text": text })))
    }

    #[tool(
        description = "Normalize English text: drop articles, expand contractions, and replace spoken numbers with digits."
    )]
    async fn vz_normalize(
        &self,
        Parameters(req): Parameters<NormalizeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let defaults = self.config.normalize;
        let options = NormalizeOptions {
            remove_articles: req.remove_articles.unwrap_or(defaults.remove_articles),
            number_substitution: match req.whole_word {
                Some(true) => NumberSubstitution::WholeWord,
                Some(false) => NumberSubstitution::Global,
                None => defaults.number_substitution,
            },
            ..defaults
        };

        let text = Normalizer::new(options)
            .normalize(&req.text)
            .map_err(|e| match e {
                NormalizeError::MissingCollaborator(_) => {
                    McpError::invalid_params(e.to_string(), None)
                }
                NormalizeError::Collaborator { .. } => {
                    McpError::internal_error(e.to_string(), None)
                }
            })?;

        Ok(json_result(serde_json::json!({ "text": text })))
    }
}

#[tool_handler]
impl ServerHandler for VzServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Number verbalization and text normalization.\n\n\
                 - vz_pronounce: digits to spoken English (\"21\" -> \"twenty one\").\n\
                 - vz_nice_number: friendly fractions for display or speech.\n\
                 - vz_fraction: raw mixed-fraction approximation.\n\
                 - vz_normalize: clean text before matching or speaking it. \
                   Spoken numbers become digits, so normalize both sides of a comparison."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_server() -> VzServer {
        VzServer::new(Config::default())
    }

    fn text_from_result(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    fn parse_result(result: &CallToolResult) -> serde_json::Value {
        let text = text_from_result(result);
        serde_json::from_str(&text).expect("handler should return valid JSON")
    }

    #[tokio::test]
    async fn test_vz_pronounce_defaults() {
        let server = make_server();
        let result = server
            .vz_pronounce(Parameters(PronounceRequest {
                value: 1234.0,
                places: None,
                short_scale: None,
                scientific: None,
            }))
            .await
            .unwrap();
        let json = parse_result(&result);
        assert_eq!(json["text"], "one thousand, two hundred and thirty four");
    }

    #[tokio::test]
    async fn test_vz_pronounce_long_scale() {
        let server = make_server();
        let result = server
            .vz_pronounce(Parameters(PronounceRequest {
                value: 1e9,
                places: None,
                short_scale: Some(false),
                scientific: None,
            }))
            .await
            .unwrap();
        assert_eq!(parse_result(&result)["text"], "one thousand million");
    }

    #[tokio::test]
    async fn test_vz_pronounce_uses_config_places() {
        let mut config = Config::default();
        config.pronounce.places = 0;
        let server = VzServer::new(config);
        let result = server
            .vz_pronounce(Parameters(PronounceRequest {
                value: 3.75,
                places: None,
                short_scale: None,
                scientific: None,
            }))
            .await
            .unwrap();
        assert_eq!(parse_result(&result)["text"], "three");
    }

    #[tokio::test]
    async fn test_vz_fraction() {
        let server = make_server();
        let result = server
            .vz_fraction(Parameters(FractionRequest {
                value: 4.5,
                denominators: Some(vec![1, 2, 4]),
            }))
            .await
            .unwrap();
        let json = parse_result(&result);
        assert_eq!(json["fraction"]["whole"], 4);
        assert_eq!(json["fraction"]["numerator"], 1);
        assert_eq!(json["fraction"]["denominator"], 2);
    }

    #[tokio::test]
    async fn test_vz_fraction_none() {
        let server = make_server();
        let result = server
            .vz_fraction(Parameters(FractionRequest {
                value: 0.37,
                denominators: Some(vec![2]),
            }))
            .await
            .unwrap();
        assert!(parse_result(&result)["fraction"].is_null());
    }

    #[tokio::test]
    async fn test_vz_fraction_rejects_zero_denominator() {
        let server = make_server();
        let result = server
            .vz_fraction(Parameters(FractionRequest {
                value: 1.5,
                denominators: Some(vec![0, 2]),
            }))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_vz_nice_number_speech() {
        let server = make_server();
        let result = server
            .vz_nice_number(Parameters(NiceNumberRequest {
                value: 4.5,
                speech: true,
                denominators: None,
            }))
            .await
            .unwrap();
        assert_eq!(parse_result(&result)["text"], "4 and a half");
    }

    #[tokio::test]
    async fn test_vz_normalize() {
        let server = make_server();
        let result = server
            .vz_normalize(Parameters(NormalizeRequest {
                text: "the cat doesn't have twenty one lives".to_string(),
                remove_articles: None,
                whole_word: None,
            }))
            .await
            .unwrap();
        assert_eq!(
            parse_result(&result)["text"],
            "cat does not have 21 lives"
        );
    }

    #[tokio::test]
    async fn test_vz_normalize_missing_collaborator() {
        let mut config = Config::default();
        config.normalize.make_singular = true;
        let server = VzServer::new(config);
        let err = server
            .vz_normalize(Parameters(NormalizeRequest {
                text: "cats".to_string(),
                remove_articles: None,
                whole_word: None,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_server_info_enables_tools() {
        let info = make_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("vz_normalize"));
    }
}
