use crate::error::{AppError, Result};
use ndarray::{Array1, Array2};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Tokens are runs of two or more word characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// TF-IDF text vectorizer
///
/// Vocabulary columns are assigned in sorted term order. IDF is smoothed,
/// `ln((1 + n) / (1 + df)) + 1`, and every transformed row is L2-normalised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Vocabulary mapping (term -> column index)
    vocabulary: HashMap<String, usize>,

    /// IDF weight per column
    idf: Vec<f64>,

    /// Number of documents seen during fit
    n_documents: usize,

    /// Is fitted (vocabulary built)
    is_fitted: bool,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            is_fitted: false,
        }
    }

    /// Learn vocabulary and IDF weights from a corpus
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(AppError::Dataset(
                "Cannot fit vectorizer on an empty corpus".to_string(),
            ));
        }

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let unique: HashSet<String> = tokenize(document.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(AppError::Dataset(
                "Empty vocabulary; documents contain no tokens".to_string(),
            ));
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());

        // BTreeMap iteration is sorted, so column order is deterministic
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();
        self.is_fitted = true;

        Ok(())
    }

    /// Transform one document into a TF-IDF row
    pub fn transform(&self, document: &str) -> Result<Array1<f64>> {
        if !self.is_fitted {
            return Err(AppError::NotTrained(
                "TfidfVectorizer must be fitted before transform".to_string(),
            ));
        }

        let mut row: Array1<f64> = Array1::zeros(self.idf.len());
        for term in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                row[idx] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row /= norm;
        }

        Ok(row)
    }

    /// Transform many documents into a feature matrix
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Result<Array2<f64>> {
        let mut matrix = Array2::zeros((documents.len(), self.n_features()));
        for (i, document) in documents.iter().enumerate() {
            let row = self.transform(document.as_ref())?;
            matrix.row_mut(i).assign(&row);
        }
        Ok(matrix)
    }

    /// Fit and transform in one step
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Array2<f64>> {
        self.fit(documents)?;
        self.transform_batch(documents)
    }

    /// Number of output columns
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Check if fitted
    pub fn is_fitted(&self) -> bool {
        self.is_fitted
    }

    /// Get vocabulary size
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a term, if it is in the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase the text and extract tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
