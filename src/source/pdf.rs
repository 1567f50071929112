use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{PageSource, PageTexts};
use crate::utils::{ValuationError, ValuationResult};

/// 已加载的PDF，逐页缓存提取出的文本
pub struct PdfDocument {
    path: PathBuf,
    pages: PageTexts,
}

impl PdfDocument {
    pub fn open(path: impl AsRef<Path>) -> ValuationResult<Self> {
        let path = path.as_ref();
        info!("解析PDF: {}", path.display());

        if !path.exists() {
            return Err(ValuationError::SourceUnavailable(format!(
                "PDF文件不存在: {}",
                path.display()
            )));
        }

        let doc = Document::load(path).map_err(|e| {
            ValuationError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let page_count = page_numbers.len();

        let mut texts: Vec<Option<String>> = match extract_with_pdf_extract(path) {
            Ok(texts) => texts.into_iter().map(Some).collect(),
            Err(e) => {
                warn!("pdf-extract 提取失败，改用 lopdf 逐页提取: {}", e);
                page_numbers
                    .iter()
                    .map(|&number| match doc.extract_text(&[number]) {
                        Ok(text) => Some(text),
                        Err(e) => {
                            debug!("第 {} 页无法提取文本: {}", number, e);
                            None
                        }
                    })
                    .collect()
            }
        };

        // pdf-extract stops at the first page it cannot render, so pad to the real count
        texts.resize(page_count.max(texts.len()), None);

        let with_text = texts.iter().filter(|t| t.as_deref().is_some_and(|s| !s.is_empty())).count();
        info!("共 {} 页，其中 {} 页含文本", texts.len(), with_text);

        Ok(Self {
            path: path.to_path_buf(),
            pages: PageTexts::new(texts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// pdf-extract panics on some broken fonts and CMaps; both panics and
/// errors come back as `ValuationError::Extraction`.
fn extract_with_pdf_extract(path: &Path) -> ValuationResult<Vec<String>> {
    contain_panic(|| {
        pdf_extract::extract_text_by_pages(path).map_err(|e| ValuationError::Extraction(e.to_string()))
    })
}

fn contain_panic<T>(f: impl FnOnce() -> ValuationResult<T>) -> ValuationResult<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(ValuationError::Extraction(format!("pdf-extract panicked: {}", message)))
        }
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.page_text(index)
    }
}
