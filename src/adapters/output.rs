use crate::domain::model::TrackingResult;
use crate::utils::error::{CorreiosError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Csv => f.write_str("csv"),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    codigo: &'a str,
    data: &'a str,
    local: &'a str,
    status: &'a str,
    detalhe: Option<&'a str>,
}

impl TrackingResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn render(result: &TrackingResult, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => result.to_json(),
        OutputFormat::Csv => render_csv(result),
    }
}

/// One row per event, oldest first. An absent detail is an empty field.
fn render_csv(result: &TrackingResult) -> Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(["codigo", "data", "local", "status", "detalhe"])?;

    for event in result.events() {
        wtr.serialize(CsvRow {
            codigo: result.identifier().code(),
            data: &event.date,
            local: &event.location,
            status: &event.status,
            detalhe: event.detail.as_deref(),
        })?;
    }

    let bytes = wtr.into_inner().map_err(|e| CorreiosError::OutputError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| CorreiosError::OutputError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::ReferenceTables;
    use crate::core::resolver::Resolver;
    use crate::domain::model::TrackingEvent;

    fn result(events: Vec<TrackingEvent>) -> TrackingResult {
        let tables = ReferenceTables::builtin();
        let resolution = Resolver::new(&tables).resolve_full("SS123456789BR").unwrap();
        TrackingResult::new(
            resolution.identifier,
            resolution.service,
            resolution.origin,
            events,
        )
    }

    fn event(position: usize, status: &str, detail: Option<&str>) -> TrackingEvent {
        TrackingEvent {
            position,
            date: format!("0{}/01/2020", position + 1),
            location: "SAO PAULO/SP".to_string(),
            status: status.to_string(),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_json_shape() {
        let r = result(vec![event(0, "Postado", Some("Encaminhado"))]);

        let json = render(&r, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "codigo": "SS123456789BR",
                "origem": {"sigla": "BR", "país": "BRASIL"},
                "servico": {"sigla": "SS", "nome": "SEDEX FÍSICO"},
                "historico": [
                    {"data": "01/01/2020", "local": "SAO PAULO/SP", "status": "Postado", "detalhe": "Encaminhado"}
                ]
            })
        );
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_pretty_json() {
        let r = result(vec![]);
        let json = render(&r, OutputFormat::Json, true).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"historico\": []"));
    }

    #[test]
    fn test_csv_rows() {
        let r = result(vec![
            event(0, "Postado", Some("Encaminhado, para SP")),
            event(1, "Entregue", None),
        ]);

        let csv = render(&r, OutputFormat::Csv, false).unwrap();

        assert_eq!(
            csv,
            "codigo,data,local,status,detalhe\n\
             SS123456789BR,01/01/2020,SAO PAULO/SP,Postado,\"Encaminhado, para SP\"\n\
             SS123456789BR,02/01/2020,SAO PAULO/SP,Entregue,\n"
        );
    }

    #[test]
    fn test_csv_without_events_has_header_only() {
        let csv = render(&result(vec![]), OutputFormat::Csv, false).unwrap();
        assert_eq!(csv, "codigo,data,local,status,detalhe\n");
    }

    #[test]
    fn test_format_parses_from_config_values() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"csv\"").unwrap();
        assert_eq!(w.format, OutputFormat::Csv);
        assert_eq!(OutputFormat::default().to_string(), "json");
    }
}
