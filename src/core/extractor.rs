//! Rebuilds the shipment history from the SRO tracking page.
//!
//! The page renders the history as a table, newest event first. Every event
//! starts with a three-cell row whose first cell carries `rowspan`:
//!
//! ```html
//! <tr><td rowspan=2>02/06/2011 19:12</td><td>CTE SAUDE - SAO PAULO/SP</td><td><FONT COLOR="000000">Encaminhado</font></td></tr>
//! <tr><td colspan=2>Em trânsito para CDD VILA MARIANA - SAO PAULO/SP</td></tr>
//! ```
//!
//! and may be followed by `colspan` rows holding a detail line for that same
//! event. Extraction is best effort: anything that does not look like one of
//! the two row kinds is skipped, and a page with no recognisable rows yields
//! an empty history.

use crate::domain::model::TrackingEvent;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Header row: date cell, location cell, then a status cell whose text closes a `<font>`.
/// The status cell may hold tags but never a `</td>` or `</tr>`, so an
/// unterminated row cannot reach into the next one.
static HEADER_REG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)rowspan\s*=\s*["']?\d+["']?\s*>(?P<date>[^<]*)</td>\s*<td[^>]*>(?P<location>[^<]*)</td>\s*<td[^>]*>(?P<status_cell>(?:<[^/][^>]*>|</[^t][^>]*>|[^<])*?)</font"#,
    )
    .unwrap()
});

/// Continuation row: a single spanning cell with the detail text.
static CONTINUATION_REG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)colspan\s*=\s*["']?\d+["']?\s*>(?P<detail>[^<]*)<"#).unwrap()
});

/// A recognised piece of the history table, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Header {
        date: &'a str,
        location: &'a str,
        status: &'a str,
    },
    Continuation {
        detail: &'a str,
    },
}

impl<'a> Fragment<'a> {
    fn header(caps: &Captures<'a>) -> Self {
        let status_cell = group(caps, "status_cell");
        // the status is whatever text follows the last tag inside the cell
        let status = status_cell.rsplit('>').next().unwrap_or(status_cell);
        Fragment::Header {
            date: group(caps, "date").trim(),
            location: group(caps, "location").trim(),
            status: status.trim(),
        }
    }

    fn continuation(caps: &Captures<'a>) -> Self {
        Fragment::Continuation {
            detail: group(caps, "detail").trim(),
        }
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Next match of one row kind at or after the scan position.
enum Lookahead<'a> {
    Pending,
    Found(Captures<'a>),
    Exhausted,
}

impl<'a> Lookahead<'a> {
    fn refresh(&mut self, reg: &Regex, document: &'a str, pos: usize) {
        let stale = match self {
            Lookahead::Pending => true,
            Lookahead::Found(caps) => caps.get(0).map_or(true, |m| m.start() < pos),
            Lookahead::Exhausted => false,
        };
        if stale {
            *self = match reg.captures_at(document, pos) {
                Some(caps) => Lookahead::Found(caps),
                None => Lookahead::Exhausted,
            };
        }
    }

    fn start(&self) -> Option<usize> {
        match self {
            Lookahead::Found(caps) => caps.get(0).map(|m| m.start()),
            _ => None,
        }
    }

    fn take(&mut self) -> Option<Captures<'a>> {
        match std::mem::replace(self, Lookahead::Pending) {
            Lookahead::Found(caps) => Some(caps),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// Walks a document yielding header and continuation fragments in the order
/// they appear. Matches never overlap; when both kinds could start at the
/// same offset the header is taken.
pub struct FragmentScanner<'a> {
    document: &'a str,
    pos: usize,
    header: Lookahead<'a>,
    continuation: Lookahead<'a>,
}

impl<'a> FragmentScanner<'a> {
    pub fn new(document: &'a str) -> Self {
        Self {
            document,
            pos: 0,
            header: Lookahead::Pending,
            continuation: Lookahead::Pending,
        }
    }
}

impl<'a> Iterator for FragmentScanner<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.header.refresh(&HEADER_REG, self.document, self.pos);
        self.continuation
            .refresh(&CONTINUATION_REG, self.document, self.pos);

        let take_header = match (self.header.start(), self.continuation.start()) {
            (Some(h), Some(c)) => h <= c,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };

        let (caps, fragment) = if take_header {
            let caps = self.header.take()?;
            let fragment = Fragment::header(&caps);
            (caps, fragment)
        } else {
            let caps = self.continuation.take()?;
            let fragment = Fragment::continuation(&caps);
            (caps, fragment)
        };
        if let Some(m) = caps.get(0) {
            self.pos = m.end();
        }
        Some(fragment)
    }
}

/// Accumulates fragments into events, tracking which event is open.
#[derive(Debug, Default)]
struct HistoryBuilder {
    events: Vec<TrackingEvent>,
    current: Option<usize>,
    discarded: usize,
}

impl HistoryBuilder {
    fn push(&mut self, fragment: Fragment<'_>) {
        match fragment {
            Fragment::Header {
                date,
                location,
                status,
            } => {
                self.events.push(TrackingEvent {
                    position: 0,
                    date: date.to_string(),
                    location: location.to_string(),
                    status: status.to_string(),
                    detail: None,
                });
                self.current = Some(self.events.len() - 1);
            }
            Fragment::Continuation { detail } => match self.current {
                // a later continuation replaces an earlier one
                Some(idx) => self.events[idx].detail = Some(detail.to_string()),
                None => self.discarded += 1,
            },
        }
    }

    /// Document order is newest first; flip it and number from the oldest.
    fn finish(mut self) -> Vec<TrackingEvent> {
        if self.discarded > 0 {
            tracing::debug!(
                "Discarded {} detail line(s) found before any event",
                self.discarded
            );
        }
        self.events.reverse();
        for (position, event) in self.events.iter_mut().enumerate() {
            event.position = position;
        }
        self.events
    }
}

/// Parse the tracking page into events, oldest first.
pub fn extract(document: &str) -> Vec<TrackingEvent> {
    let mut builder = HistoryBuilder::default();
    for fragment in FragmentScanner::new(document) {
        builder.push(fragment);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(date: &str, location: &str, status: &str) -> String {
        format!(
            "<tr><td rowspan=2>{}</td><td>{}</td><td><FONT COLOR=\"000000\">{}</font></td></tr>\n",
            date, location, status
        )
    }

    fn continuation(detail: &str) -> String {
        format!("<tr><td colspan=2>{}</td></tr>\n", detail)
    }

    fn summary(events: &[TrackingEvent]) -> Vec<(usize, &str, &str, &str, Option<&str>)> {
        events
            .iter()
            .map(|e| {
                (
                    e.position,
                    e.date.as_str(),
                    e.location.as_str(),
                    e.status.as_str(),
                    e.detail.as_deref(),
                )
            })
            .collect()
    }

    const SRO_PAGE: &str = r#"<html><body>
<table  border cellpadding=1 hspace=10>
<tr><td><b>Data</b></td><td><b>Local</b></td><td><b>Situação</b></td></tr>
<tr><td rowspan=1>03/06/2011 14:24</td><td>CDD VILA MARIANA - SAO PAULO/SP</td><td><FONT COLOR="000000">Entregue</font></td></tr>
<tr><td rowspan=2>03/06/2011 09:34</td><td>CDD VILA MARIANA - SAO PAULO/SP</td><td><FONT COLOR="000000">Saiu para entrega</font></td></tr>
<tr><td colspan=2>Por favor, aguarde</td></tr>
<tr><td rowspan=2>02/06/2011 19:12</td><td>CTE SAUDE - SAO PAULO/SP</td><td><FONT COLOR="000000">Encaminhado</font></td></tr>
<tr><td colspan=2>Em trânsito para CDD VILA MARIANA - SAO PAULO/SP</td></tr>
<tr><td rowspan=1>01/06/2011 16:40</td><td>AGF CENTRO - CAMPINAS/SP</td><td><FONT COLOR="000000">Postado</font></td></tr>
</table>
</body></html>"#;

    #[test]
    fn test_empty_document() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_document_without_history() {
        let page = "<html><p>O nosso sistema não possui dados sobre o objeto informado.</p></html>";
        assert!(extract(page).is_empty());
    }

    #[test]
    fn test_sro_page() {
        let events = extract(SRO_PAGE);

        assert_eq!(
            summary(&events),
            vec![
                (0, "01/06/2011 16:40", "AGF CENTRO - CAMPINAS/SP", "Postado", None),
                (
                    1,
                    "02/06/2011 19:12",
                    "CTE SAUDE - SAO PAULO/SP",
                    "Encaminhado",
                    Some("Em trânsito para CDD VILA MARIANA - SAO PAULO/SP")
                ),
                (
                    2,
                    "03/06/2011 09:34",
                    "CDD VILA MARIANA - SAO PAULO/SP",
                    "Saiu para entrega",
                    Some("Por favor, aguarde")
                ),
                (3, "03/06/2011 14:24", "CDD VILA MARIANA - SAO PAULO/SP", "Entregue", None),
            ]
        );
    }

    #[test]
    fn test_detail_attaches_to_preceding_header() {
        let doc = [
            header("01/01/2020", "SP", "Postado"),
            continuation("Encaminhado"),
            header("02/01/2020", "RJ", "Entregue"),
        ]
        .concat();

        let events = extract(&doc);

        assert_eq!(
            summary(&events),
            vec![
                (0, "02/01/2020", "RJ", "Entregue", None),
                (1, "01/01/2020", "SP", "Postado", Some("Encaminhado")),
            ]
        );
    }

    #[test]
    fn test_result_reverses_document_order() {
        let doc = [
            header("03/01/2020", "C", "H1"),
            header("02/01/2020", "B", "H2"),
            header("01/01/2020", "A", "H3"),
        ]
        .concat();

        let statuses: Vec<_> = extract(&doc).into_iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec!["H3", "H2", "H1"]);
    }

    #[test]
    fn test_leading_continuation_is_discarded() {
        let doc = [
            continuation("Cabeçalho solto"),
            header("01/01/2020", "SP", "Postado"),
        ]
        .concat();

        let events = extract(&doc);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].detail, None);
    }

    #[test]
    fn test_last_continuation_wins() {
        let doc = [
            header("01/01/2020", "SP", "Postado"),
            continuation("primeiro"),
            continuation("segundo"),
        ]
        .concat();

        let events = extract(&doc);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].detail.as_deref(), Some("segundo"));
    }

    #[test]
    fn test_empty_detail_is_not_absent() {
        let doc = [header("01/01/2020", "SP", "Postado"), continuation("")].concat();

        let events = extract(&doc);
        assert_eq!(events[0].detail.as_deref(), Some(""));
    }

    #[test]
    fn test_mixed_case_markup() {
        let doc = "<TR><TD ROWSPAN=2>01/01/2020</TD><TD>SP</TD><TD><font color=\"000000\">Postado</FONT></TD></TR>\
                   <TR><TD COLSPAN=2>Encaminhado</TD></TR>";

        let events = extract(doc);
        assert_eq!(
            summary(&events),
            vec![(0, "01/01/2020", "SP", "Postado", Some("Encaminhado"))]
        );
    }

    #[test]
    fn test_whitespace_between_rows_and_cells() {
        let doc = "<tr>\n  <td rowspan=\"2\">01/01/2020 10:00</td>\n  <td>SP</td>\n  <td><font>Postado</font></td>\n</tr>\n\n\n\
                   <tr>\n  <td colspan = 2>\n    Encaminhado para RJ\n  </td>\n</tr>";

        let events = extract(doc);
        assert_eq!(
            summary(&events),
            vec![(
                0,
                "01/01/2020 10:00",
                "SP",
                "Postado",
                Some("Encaminhado para RJ")
            )]
        );
    }

    #[test]
    fn test_status_inside_nested_tags() {
        let doc = "<td rowspan=1>01/01/2020</td><td>SP</td><td><b><font color=red>Devolvido</font></b></td>";

        let events = extract(doc);
        assert_eq!(events[0].status, "Devolvido");
    }

    #[test]
    fn test_rows_on_a_single_line() {
        let doc = [
            header("02/01/2020", "RJ", "Entregue"),
            continuation("Recebido por JOSE"),
            header("01/01/2020", "SP", "Postado"),
        ]
        .concat()
        .replace('\n', "");

        let events = extract(&doc);
        assert_eq!(
            summary(&events),
            vec![
                (0, "01/01/2020", "SP", "Postado", None),
                (1, "02/01/2020", "RJ", "Entregue", Some("Recebido por JOSE")),
            ]
        );
    }

    #[test]
    fn test_incomplete_header_is_skipped() {
        // no </font> closing the status cell on this row
        let doc = [
            "<tr><td rowspan=1>09/09/2020</td><td>SP</td><td>sem status</td></tr>\n".to_string(),
            header("01/01/2020", "SP", "Postado"),
        ]
        .concat();

        let events = extract(&doc);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, "01/01/2020");
    }

    #[test]
    fn test_incomplete_header_on_single_line_does_not_absorb_next_row() {
        let doc = "<tr><td rowspan=1>09/09/2020</td><td>SP</td><td>sem status</td></tr>\
                   <tr><td rowspan=2>01/01/2020</td><td>RJ</td><td><font>Postado</font></td></tr>\
                   <tr><td colspan=2>det</td></tr>";

        let events = extract(doc);
        assert_eq!(
            summary(&events),
            vec![(0, "01/01/2020", "RJ", "Postado", Some("det"))]
        );
    }

    #[test]
    fn test_status_cell_with_closing_inner_tags() {
        let doc = "<td rowspan=1>01/01/2020</td><td>SP</td><td><b>!</b><font>Postado</font></td>";

        let events = extract(doc);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, "Postado");
    }

    #[test]
    fn test_single_quoted_spans_with_crlf() {
        let doc = "<TR><TD ROWSPAN='2'>02/01/2020</TD><TD>RJ</TD><TD><FONT>Entregue</FONT></TD></TR>\r\n\
                   <TR><TD COLSPAN='2'>Recebido</TD></TR>\r\n\
                   <TR><TD ROWSPAN='1'>01/01/2020</TD><TD>SP</TD><TD><FONT>Postado</FONT></TD></TR>\r\n";

        let events = extract(doc);
        assert_eq!(
            summary(&events),
            vec![
                (0, "01/01/2020", "SP", "Postado", None),
                (1, "02/01/2020", "RJ", "Entregue", Some("Recebido")),
            ]
        );
    }

    #[test]
    fn test_scanner_yields_fragments_in_document_order() {
        let doc = [
            continuation("antes"),
            header("01/01/2020", "SP", "Postado"),
            continuation("depois"),
        ]
        .concat();

        let fragments: Vec<_> = FragmentScanner::new(&doc).collect();
        assert_eq!(
            fragments,
            vec![
                Fragment::Continuation { detail: "antes" },
                Fragment::Header {
                    date: "01/01/2020",
                    location: "SP",
                    status: "Postado"
                },
                Fragment::Continuation { detail: "depois" },
            ]
        );
    }

    #[test]
    fn test_extract_is_idempotent() {
        assert_eq!(extract(SRO_PAGE), extract(SRO_PAGE));
    }
}
