use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Upload formats whose extracted text the pipeline accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Txt,
    Md,
    Pdf,
    Docx,
}

impl SourceFormat {
    pub fn from_file_name(file_name: &str) -> AppResult<Self> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(SourceFormat::Txt),
            "md" => Ok(SourceFormat::Md),
            "pdf" => Ok(SourceFormat::Pdf),
            "docx" => Ok(SourceFormat::Docx),
            _ => Err(AppError::UnsupportedFormat(format!(
                "Unsupported file type: {}",
                file_name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffixes_are_case_insensitive() {
        assert_eq!(SourceFormat::from_file_name("a.TXT").unwrap(), SourceFormat::Txt);
        assert_eq!(SourceFormat::from_file_name("notes.v2.pdf").unwrap(), SourceFormat::Pdf);
        assert_eq!(SourceFormat::from_file_name("b.docx").unwrap(), SourceFormat::Docx);
    }

    #[test]
    fn unknown_or_missing_suffix_is_unsupported() {
        for name in ["slides.pptx", "README", "archive.zip"] {
            let err = SourceFormat::from_file_name(name).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedFormat(_)), "{name}");
        }
    }
}
