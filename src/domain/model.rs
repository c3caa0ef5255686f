use serde::{Serialize, Serializer};

/// A validated tracking code, e.g. `SS123456789BR`.
///
/// Only `Resolver` builds these, so holding one means the code had the
/// right shape and both embedded codes were present in the reference tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingIdentifier {
    code: String,
    service_code: String,
    origin_code: String,
}

impl TrackingIdentifier {
    pub(crate) fn new(code: String, service_code: String, origin_code: String) -> Self {
        Self {
            code,
            service_code,
            origin_code,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    pub fn origin_code(&self) -> &str {
        &self.origin_code
    }
}

impl std::fmt::Display for TrackingIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for TrackingIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginInfo {
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "país")]
    pub country: String,
}

/// One row of the shipment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    /// 0 is the oldest event
    #[serde(skip)]
    pub position: usize,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "local")]
    pub location: String,
    pub status: String,
    #[serde(rename = "detalhe", skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Everything known about one tracking code after a single fetch.
///
/// Never updated in place; tracking again yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingResult {
    #[serde(rename = "codigo")]
    identifier: TrackingIdentifier,
    #[serde(rename = "origem")]
    origin: OriginInfo,
    #[serde(rename = "servico")]
    service: ServiceInfo,
    #[serde(rename = "historico")]
    events: Vec<TrackingEvent>,
}

impl TrackingResult {
    pub fn new(
        identifier: TrackingIdentifier,
        service: ServiceInfo,
        origin: OriginInfo,
        events: Vec<TrackingEvent>,
    ) -> Self {
        Self {
            identifier,
            origin,
            service,
            events,
        }
    }

    pub fn identifier(&self) -> &TrackingIdentifier {
        &self.identifier
    }

    pub fn service(&self) -> &ServiceInfo {
        &self.service
    }

    pub fn origin(&self) -> &OriginInfo {
        &self.origin
    }

    /// Events oldest first.
    pub fn events(&self) -> &[TrackingEvent] {
        &self.events
    }

    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.events.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrackingResult {
        TrackingResult::new(
            TrackingIdentifier::new(
                "SS123456789BR".to_string(),
                "SS".to_string(),
                "BR".to_string(),
            ),
            ServiceInfo {
                code: "SS".to_string(),
                name: "SEDEX FÍSICO".to_string(),
            },
            OriginInfo {
                code: "BR".to_string(),
                country: "BRASIL".to_string(),
            },
            vec![
                TrackingEvent {
                    position: 0,
                    date: "01/01/2020".to_string(),
                    location: "SP".to_string(),
                    status: "Postado".to_string(),
                    detail: Some("Encaminhado".to_string()),
                },
                TrackingEvent {
                    position: 1,
                    date: "02/01/2020".to_string(),
                    location: "RJ".to_string(),
                    status: "Entregue".to_string(),
                    detail: None,
                },
            ],
        )
    }

    #[test]
    fn test_result_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["codigo"], "SS123456789BR");
        assert_eq!(value["servico"]["sigla"], "SS");
        assert_eq!(value["servico"]["nome"], "SEDEX FÍSICO");
        assert_eq!(value["origem"]["sigla"], "BR");
        assert_eq!(value["origem"]["país"], "BRASIL");
        assert_eq!(value["historico"][0]["data"], "01/01/2020");
        assert_eq!(value["historico"][0]["local"], "SP");
        assert_eq!(value["historico"][0]["detalhe"], "Encaminhado");
        assert!(value["historico"][0].get("position").is_none());
    }

    #[test]
    fn test_absent_detail_is_omitted() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value["historico"][1].get("detalhe").is_none());
    }

    #[test]
    fn test_latest_event_is_last_chronologically() {
        let result = sample();
        assert_eq!(result.latest_event().unwrap().status, "Entregue");
        assert_eq!(result.identifier().to_string(), "SS123456789BR");
    }
}
