// Listing normalization pipeline: a strict linear chain of stateless stages.

pub mod stages;

use tracing::debug;

use crate::batch::Batch;
use crate::config::Config;
use crate::error::Result;
use stages::Stage;

/// The fixed stage chain. Stages run in dependency order; a later stage may
/// assume the columns produced by every earlier stage exist.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// The standard nine-stage normalization chain.
    pub fn standard(config: &Config) -> Self {
        Self {
            stages: vec![
                Box::new(stages::column_rename::ColumnRename),
                Box::new(stages::status::StatusNormalizer),
                Box::new(stages::name_split::NameSplitter),
                Box::new(stages::open_house::OpenHouseExtractor),
                Box::new(stages::address::AddressComposer),
                Box::new(stages::email_split::EmailSplitter),
                Box::new(stages::transaction_id::TransactionIdGenerator),
                Box::new(stages::phone::PhoneNormalizer::new(
                    config.phone_column.clone(),
                )),
                Box::new(stages::coerce::CoercePrune::new(
                    config.unnamed_column_prefix.clone(),
                    config.numeric_columns.clone(),
                )),
            ],
        }
    }

    /// Run every stage in sequence, handing each the batch the previous one
    /// produced.
    pub fn run(&self, mut batch: Batch) -> Result<Batch> {
        for stage in &self.stages {
            debug!(stage = stage.name(), rows = batch.row_count(), "applying stage");
            batch = stage.apply(batch)?;
        }
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw_batch() -> Batch {
        let mut batch = Batch::new(
            [
                "propertyStatus",
                "presentedBy",
                "openHouse",
                "addr1",
                "addr2",
                "city",
                "state",
                "zipcode",
                "email",
                "realtorMobile",
                "sourcePropertyId",
                "price",
                "Unnamed: 0",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        );
        batch.push_row(vec![
            json!("Active Under Contract"),
            json!("Jane Q Public"),
            json!(r#"[{"oh_startTime":"2024-06-01T10:00"},{"oh_startTime":"later"}]"#),
            json!("123 Main St"),
            Value::Null,
            json!("Springfield"),
            json!("IL"),
            json!(62704),
            json!("a@x.com; b@x.com c@x.com"),
            json!("+1 (555) 123-4567"),
            json!("MLS42"),
            json!("N/A"),
            Value::Null,
        ]);
        batch
    }

    #[test]
    fn test_standard_pipeline_end_to_end() {
        let pipeline = Pipeline::standard(&Config::default());
        let out = pipeline.run(raw_batch()).unwrap();

        assert_eq!(out.row_count(), 1);
        assert_eq!(out.get(0, "property_status"), Some(&json!("Pending")));
        assert_eq!(out.get(0, "presented_by_first_name"), Some(&json!("Jane")));
        assert_eq!(out.get(0, "oh_startTime"), Some(&json!("2024-06-01T10:00")));
        assert_eq!(
            out.get(0, "full_address"),
            Some(&json!("123 Main St, Springfield, IL, 62704"))
        );
        assert_eq!(out.get(0, "email_1"), Some(&json!("a@x.com")));
        assert_eq!(out.get(0, "email_2"), Some(&json!("b@x.com")));
        assert_eq!(
            out.get(0, "id"),
            Some(&json!("mls42-123-main-st-springfield-il-62704"))
        );
        assert_eq!(out.get(0, "presented_by_mobile"), Some(&json!("5551234567")));
        assert_eq!(out.get(0, "price"), Some(&Value::Null));

        // Decomposed sources are dropped, all-null unnamed columns pruned
        assert!(!out.has_column("presented_by"));
        assert!(!out.has_column("open_house"));
        assert!(!out.has_column("Unnamed: 0"));
        // email source survives
        assert!(out.has_column("email"));
    }

    #[test]
    fn test_pipeline_preserves_row_order() {
        let mut batch = Batch::new(vec![
            "presentedBy".to_string(),
            "openHouse".to_string(),
            "email".to_string(),
            "sourcePropertyId".to_string(),
        ]);
        for i in 0..5 {
            batch.push_row(vec![
                json!(format!("Agent {i}")),
                Value::Null,
                Value::Null,
                json!(format!("MLS{i}")),
            ]);
        }

        let out = Pipeline::standard(&Config::default()).run(batch).unwrap();
        assert_eq!(out.row_count(), 5);
        for i in 0..5 {
            assert_eq!(out.get(i, "id"), Some(&json!(format!("mls{i}"))));
        }
    }

    #[test]
    fn test_missing_required_column_surfaces_error() {
        let batch = Batch::new(vec!["price".to_string()]);
        let err = Pipeline::standard(&Config::default()).run(batch).unwrap_err();
        assert!(matches!(err, crate::error::NormalizerError::MissingColumn(_)));
    }
}
