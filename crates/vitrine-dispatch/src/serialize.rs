//! Structured serialization of result lists.
//!
//! Handles JSON, YAML, XML, and CSV. These bypass template rendering
//! entirely.

use serde::Serialize;
use thiserror::Error;
use vitrine_seeker::{DimensionUniverse, Item};

use crate::OutputMode;

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("Not a structured output mode")]
    NotStructured,
}

/// XML needs a single root element around the item sequence.
#[derive(Serialize)]
#[serde(rename = "results")]
struct XmlResults<'a> {
    item: &'a [Item],
}

#[derive(Serialize)]
#[serde(rename = "dimensions")]
struct XmlDimensions<'a> {
    category: &'a [String],
    brand: &'a [String],
}

const CSV_HEADERS: [&str; 4] = [Item::NAME, Item::PRICE, Item::CATEGORY, Item::BRAND];

/// Serializes a result list to the specified structured format.
///
/// Returns an error if the output mode is not a structured mode.
pub fn serialize_results(items: &[Item], mode: OutputMode) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => to_json(items),
        OutputMode::Yaml => to_yaml(items),
        OutputMode::Xml => to_xml(items),
        OutputMode::Csv => to_csv(items),
        _ => Err(SerializeError::NotStructured),
    }
}

/// Serializes the category and brand choices to a structured format.
///
/// CSV output has one `dimension,value` row per choice.
pub fn serialize_dimensions(
    universe: &DimensionUniverse,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => to_json(universe),
        OutputMode::Yaml => to_yaml(universe),
        OutputMode::Xml => Ok(quick_xml::se::to_string(&XmlDimensions {
            category: &universe.categories,
            brand: &universe.brands,
        })?),
        OutputMode::Csv => dimensions_to_csv(universe),
        _ => Err(SerializeError::NotStructured),
    }
}

/// Serializes a value to pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Serializes a value to YAML.
pub fn to_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, SerializeError> {
    Ok(serde_yaml::to_string(data)?)
}

/// Serializes items to XML under a `<results>` root, one `<item>` each.
pub fn to_xml(items: &[Item]) -> Result<String, SerializeError> {
    Ok(quick_xml::se::to_string(&XmlResults { item: items })?)
}

/// Serializes items to CSV with a fixed `name,price,category,brand` header.
///
/// The header is written even when there are no items.
pub fn to_csv(items: &[Item]) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADERS)
        .map_err(|e| SerializeError::Csv(e.to_string()))?;

    for item in items {
        let price = item.price.to_string();
        wtr.write_record([
            item.name.as_str(),
            price.as_str(),
            item.category.as_str(),
            item.brand.as_str(),
        ])
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

fn dimensions_to_csv(universe: &DimensionUniverse) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["dimension", "value"])
        .map_err(|e| SerializeError::Csv(e.to_string()))?;

    let rows = universe
        .categories
        .iter()
        .map(|value| (Item::CATEGORY, value))
        .chain(universe.brands.iter().map(|value| (Item::BRAND, value)));
    for (dimension, value) in rows {
        wtr.write_record([dimension, value.as_str()])
            .map_err(|e| SerializeError::Csv(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("Rake", 18.5, "Garden", "Dig"),
            Item::new("Hose, 20m", 30.0, "Garden", "Flow"),
        ]
    }

    #[test]
    fn test_to_json() {
        let result = serialize_results(&items(), OutputMode::Json).unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, items());
        assert!(result.contains("\"name\": \"Rake\""));
    }

    #[test]
    fn test_empty_json_is_empty_array() {
        assert_eq!(serialize_results(&[], OutputMode::Json).unwrap(), "[]");
    }

    #[test]
    fn test_to_yaml() {
        let result = serialize_results(&items(), OutputMode::Yaml).unwrap();
        assert!(result.contains("name: Rake"));
        assert!(result.contains("price: 18.5"));
        assert!(result.contains("category: Garden"));
    }

    #[test]
    fn test_to_xml() {
        let result = serialize_results(&items(), OutputMode::Xml).unwrap();
        assert!(result.starts_with("<results>"));
        assert!(result.contains("<item><name>Rake</name>"));
        assert!(result.contains("<brand>Flow</brand>"));
    }

    #[test]
    fn test_to_csv() {
        let result = serialize_results(&items(), OutputMode::Csv).unwrap();
        assert_eq!(
            result,
            "name,price,category,brand\nRake,18.5,Garden,Dig\n\"Hose, 20m\",30,Garden,Flow\n"
        );
    }

    #[test]
    fn test_empty_csv_keeps_header() {
        assert_eq!(
            serialize_results(&[], OutputMode::Csv).unwrap(),
            "name,price,category,brand\n"
        );
    }

    fn universe() -> DimensionUniverse {
        DimensionUniverse {
            categories: vec!["Garden".into(), "Tools".into()],
            brands: vec!["Dig".into()],
        }
    }

    #[test]
    fn test_dimensions_json() {
        let result = serialize_dimensions(&universe(), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"categories": ["Garden", "Tools"], "brands": ["Dig"]})
        );
    }

    #[test]
    fn test_dimensions_csv() {
        assert_eq!(
            serialize_dimensions(&universe(), OutputMode::Csv).unwrap(),
            "dimension,value\ncategory,Garden\ncategory,Tools\nbrand,Dig\n"
        );
    }

    #[test]
    fn test_dimensions_xml() {
        let result = serialize_dimensions(&universe(), OutputMode::Xml).unwrap();
        assert!(result.contains("<category>Garden</category>"));
        assert!(result.contains("<brand>Dig</brand>"));
    }

    #[test]
    fn test_text_modes_are_not_structured() {
        for mode in [OutputMode::Auto, OutputMode::Term, OutputMode::Text] {
            assert!(matches!(
                serialize_results(&items(), mode),
                Err(SerializeError::NotStructured)
            ));
        }
    }
}
