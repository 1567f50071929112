pub mod pdf;

pub use pdf::PdfDocument;

/// 按页提供文本的文档
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Text of page `index`, or `None` when the page is missing or has no text.
    fn page_text(&self, index: usize) -> Option<&str>;
}

/// 内存中的逐页文本
#[derive(Debug, Clone, Default)]
pub struct PageTexts {
    pages: Vec<Option<String>>,
}

impl PageTexts {
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self { pages }
    }

    pub fn from_strings<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|p| Some(p.into())).collect(),
        }
    }
}

impl PageSource for PageTexts {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Option<&str> {
        self.pages
            .get(index)
            .and_then(|p| p.as_deref())
            .filter(|text| !text.is_empty())
    }
}
