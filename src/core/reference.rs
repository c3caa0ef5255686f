use crate::core::reference_data::{COUNTRIES, SERVICES};
use crate::domain::model::{OriginInfo, ServiceInfo};
use crate::utils::error::{CorreiosError, Result};
use crate::utils::validation::validate_table_code;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only lookup tables for the two-letter codes embedded in tracking
/// codes: the service (first two letters) and the origin country (last two).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    services: BTreeMap<String, String>,
    countries: BTreeMap<String, String>,
}

/// On-disk shape. Either section may be left out to keep the built-in one.
#[derive(Debug, Deserialize)]
struct TablesFile {
    servicos: Option<BTreeMap<String, String>>,
    paises: Option<BTreeMap<String, String>>,
}

impl ReferenceTables {
    pub fn new(services: BTreeMap<String, String>, countries: BTreeMap<String, String>) -> Self {
        Self {
            services,
            countries,
        }
    }

    pub fn builtin() -> Self {
        Self {
            services: to_map(SERVICES),
            countries: to_map(COUNTRIES),
        }
    }

    /// Parse tables from TOML:
    ///
    /// ```toml
    /// [servicos]
    /// SS = "SEDEX FÍSICO"
    ///
    /// [paises]
    /// BR = "BRASIL"
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TablesFile =
            toml::from_str(content).map_err(|e| CorreiosError::ConfigValidationError {
                field: "reference".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        let builtin = Self::builtin();
        let services = match file.servicos {
            Some(services) => checked("reference.servicos", services)?,
            None => builtin.services,
        };
        let countries = match file.paises {
            Some(countries) => checked("reference.paises", countries)?,
            None => builtin.countries,
        };

        Ok(Self {
            services,
            countries,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CorreiosError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn service(&self, code: &str) -> Option<ServiceInfo> {
        self.services.get(code).map(|name| ServiceInfo {
            code: code.to_string(),
            name: name.clone(),
        })
    }

    pub fn origin(&self, code: &str) -> Option<OriginInfo> {
        self.countries.get(code).map(|country| OriginInfo {
            code: code.to_string(),
            country: country.clone(),
        })
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn countries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.countries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

fn checked(field: &str, table: BTreeMap<String, String>) -> Result<BTreeMap<String, String>> {
    for code in table.keys() {
        validate_table_code(field, code)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_know_common_codes() {
        let tables = ReferenceTables::builtin();

        assert_eq!(tables.service("SS").unwrap().name, "SEDEX FÍSICO");
        assert_eq!(tables.service("SX").unwrap().name, "SEDEX 10");
        assert_eq!(tables.origin("BR").unwrap().country, "BRASIL");
        assert_eq!(tables.origin("US").unwrap().country, "ESTADOS UNIDOS");
        assert!(tables.service("ZZ").is_none());
        assert!(tables.origin("ZZ").is_none());
    }

    #[test]
    fn test_builtin_keys_are_valid_codes() {
        let tables = ReferenceTables::builtin();
        for (code, _) in tables.services().chain(tables.countries()) {
            assert!(validate_table_code("builtin", code).is_ok(), "bad key {}", code);
        }
    }

    #[test]
    fn test_fixture_tables_replace_builtin_sections() {
        let tables = ReferenceTables::from_toml_str(
            r#"
[servicos]
ZZ = "SERVIÇO DE TESTE"
"#,
        )
        .unwrap();

        assert_eq!(tables.service("ZZ").unwrap().name, "SERVIÇO DE TESTE");
        assert!(tables.service("SS").is_none());
        // countries untouched
        assert_eq!(tables.origin("BR").unwrap().country, "BRASIL");
    }

    #[test]
    fn test_tables_built_directly() {
        let services = BTreeMap::from([("ZZ".to_string(), "TESTE".to_string())]);
        let countries = BTreeMap::from([("XY".to_string(), "TERRA DE TESTE".to_string())]);
        let tables = ReferenceTables::new(services, countries);

        assert_eq!(tables.service("ZZ").unwrap().name, "TESTE");
        assert_eq!(tables.origin("XY").unwrap().country, "TERRA DE TESTE");
        assert!(tables.origin("BR").is_none());
        assert_eq!(tables.services().count(), 1);
    }

    #[test]
    fn test_invalid_keys_are_rejected() {
        let result = ReferenceTables::from_toml_str(
            r#"
[paises]
bra = "BRASIL"
"#,
        );
        assert!(matches!(
            result,
            Err(CorreiosError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let result = ReferenceTables::from_toml_str("[servicos\nSS = ");
        assert!(matches!(
            result,
            Err(CorreiosError::ConfigValidationError { .. })
        ));
    }
}
