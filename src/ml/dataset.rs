use crate::error::{AppError, Result};
use crate::ml::models::LabeledText;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Row shape of the training CSV; other columns are ignored
#[derive(Debug, Deserialize)]
struct CsvRow {
    text: String,
    label: i64,
}

/// Load labeled texts from a CSV file with `text` and `label` columns
pub fn load_training_csv(path: &Path) -> Result<Vec<LabeledText>> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::Dataset(format!("Cannot open training data {}: {}", path.display(), e))
    })?;

    let samples = read_training_csv(file)?;
    info!(path = %path.display(), rows = samples.len(), "Loaded training data");

    Ok(samples)
}

/// Parse labeled texts from any CSV reader
pub fn read_training_csv<R: Read>(reader: R) -> Result<Vec<LabeledText>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (line, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        let label = match row.label {
            0 => 0,
            1 => 1,
            other => {
                return Err(AppError::Dataset(format!(
                    "Row {} has label {}; expected 0 or 1",
                    line + 1,
                    other
                )))
            }
        };
        samples.push(LabeledText::new(row.text, label));
    }

    if samples.is_empty() {
        return Err(AppError::Dataset("Training data has no rows".to_string()));
    }

    debug!(
        stressed = samples.iter().filter(|s| s.label == 1).count(),
        total = samples.len(),
        "Parsed training rows"
    );

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_text_and_label_columns() {
        let data = "subreddit,text,label,confidence\n\
                    ptsd,\"I can't sleep, everything is too much\",1,0.8\n\
                    relationships,We had a lovely dinner,0,1.0\n";

        let samples = read_training_csv(data.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].text, "I can't sleep, everything is too much");
        assert_eq!(samples[0].label, 1);
        assert_eq!(samples[1].label, 0);
    }

    #[test]
    fn test_rejects_non_binary_labels() {
        let data = "text,label\nhello there,2\n";
        assert!(matches!(
            read_training_csv(data.as_bytes()),
            Err(AppError::Dataset(_))
        ));
    }

    #[test]
    fn test_rejects_missing_columns() {
        let data = "body,label\nhello there,1\n";
        assert!(read_training_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_empty_file() {
        let data = "text,label\n";
        assert!(read_training_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_is_dataset_error() {
        let result = load_training_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(AppError::Dataset(_))));
    }
}
