use std::path::Path;
use tracing::{info, warn};

use crate::generator::{render_summary, write_csv};
use crate::parser::ExtractionPipeline;
use crate::record::ValuationRecord;
use crate::source::{PageSource, PdfDocument};
use crate::utils::{ValuationError, ValuationResult};

/// 当前文档与最近一次提取结果
pub struct Session {
    pipeline: ExtractionPipeline,
    document: Option<Box<dyn PageSource>>,
    record: Option<ValuationRecord>,
}

impl Session {
    pub fn new(pipeline: ExtractionPipeline) -> Self {
        Self {
            pipeline,
            document: None,
            record: None,
        }
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> ValuationResult<()> {
        self.document = None;
        self.record = None;
        let document = PdfDocument::open(path)?;
        self.set_document(document);
        Ok(())
    }

    /// Use an already loaded page source. Clears any previous record.
    pub fn set_document(&mut self, document: impl PageSource + 'static) {
        self.document = Some(Box::new(document));
        self.record = None;
    }

    /// A failed run leaves no record behind, so nothing stale can be exported.
    pub fn extract(&mut self) -> ValuationResult<&ValuationRecord> {
        let document = self.document.as_deref().ok_or(ValuationError::NoDocument)?;
        self.record = None;

        match self.pipeline.process(document) {
            Ok(record) => Ok(self.record.insert(record)),
            Err(e) => {
                warn!("提取失败: {}", e);
                Err(e)
            }
        }
    }

    pub fn record(&self) -> Option<&ValuationRecord> {
        self.record.as_ref()
    }

    pub fn summary(&self) -> ValuationResult<String> {
        self.record
            .as_ref()
            .map(render_summary)
            .ok_or(ValuationError::NoRecord)
    }

    pub fn export(&self, path: impl AsRef<Path>) -> ValuationResult<()> {
        let record = self.record.as_ref().ok_or(ValuationError::NoRecord)?;
        write_csv(record, path.as_ref())?;
        info!("导出 {} 个字段", record.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::keys;
    use crate::source::PageTexts;

    #[test]
    fn extract_requires_a_document() {
        let mut session = Session::new(ExtractionPipeline::default());
        assert!(matches!(session.extract(), Err(ValuationError::NoDocument)));
        assert!(matches!(session.summary(), Err(ValuationError::NoRecord)));
    }

    #[test]
    fn export_requires_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut session = Session::new(ExtractionPipeline::default());
        session.set_document(PageTexts::from_strings(["Total $1.00"]));

        assert!(matches!(session.export(&path), Err(ValuationError::NoRecord)));
        assert!(!path.exists());

        session.extract().unwrap();
        session.export(&path).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.starts_with("Field,Value\n"));
        assert!(csv.contains("Total,1.00"));
    }

    #[test]
    fn failed_extraction_drops_previous_record() {
        let mut session = Session::new(ExtractionPipeline::default());
        session.set_document(PageTexts::from_strings(["Total $1.00"]));
        session.extract().unwrap();
        assert!(session.record().is_some());

        session.set_document(PageTexts::default());
        assert!(session.record().is_none());
        assert!(session.extract().is_err());
        assert!(session.record().is_none());
    }

    #[test]
    fn each_run_rebuilds_the_record() {
        let mut session = Session::new(ExtractionPipeline::default());
        session.set_document(PageTexts::from_strings(["Total $1.00"]));
        session.extract().unwrap();

        session.set_document(PageTexts::from_strings(["Base Vehicle Value $2.00"]));
        let record = session.extract().unwrap();
        assert_eq!(record.get(keys::BASE_VEHICLE_VALUE), Some("2.00"));
        assert!(record.get(keys::TOTAL).is_none());
    }

    #[test]
    fn unreadable_file_leaves_no_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(ExtractionPipeline::default());
        session.set_document(PageTexts::from_strings(["Total $1.00"]));

        let result = session.load(dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(ValuationError::SourceUnavailable(_))));
        assert!(matches!(session.extract(), Err(ValuationError::NoDocument)));
    }
}
