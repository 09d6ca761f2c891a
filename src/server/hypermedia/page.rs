//! Page adapter: explicit page values and in-memory slicing of unpaged sequences.
//!
//! Natively paged sources (database paginators) and full in-memory sequences both end
//! up as a [`Page`], so assemblers cannot tell the two apart.

use serde::Serialize;

use crate::server::error::assembly::AssemblyError;

/// Requested page, zero-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    /// `field[,asc|desc]`; interpretation is left to the data source.
    pub sort: Option<String>,
}

impl PageRequest {
    pub const DEFAULT_SIZE: u64 = 20;

    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// `page * size`
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// Page metadata rendered next to paged content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// Ordered bounded slice of instances plus the total element count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u64,
    size: u64,
    total_elements: u64,
    /// Sort the content was fetched with, repeated in navigation links.
    sort: Option<String>,
}

impl<T> Page<T> {
    /// Creates a page, rejecting inconsistent input.
    ///
    /// # Returns
    /// - `Ok(Page)` - Consistent page
    /// - `Err(AssemblyError::InvalidArgument)` - Size is zero, or the content is larger
    ///   than the page size or the total element count
    pub fn new(
        content: Vec<T>,
        number: u64,
        size: u64,
        total_elements: u64,
    ) -> Result<Self, AssemblyError> {
        if size == 0 {
            return Err(AssemblyError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let len = content.len() as u64;
        if len > size {
            return Err(AssemblyError::InvalidArgument(format!(
                "page holds {} elements but its size is {}",
                len, size
            )));
        }
        if len > total_elements {
            return Err(AssemblyError::InvalidArgument(format!(
                "page holds {} elements but the total is {}",
                len, total_elements
            )));
        }

        Ok(Self {
            content,
            number,
            size,
            total_elements,
            sort: None,
        })
    }

    /// Records the sort order the content was fetched with.
    pub fn with_sort(mut self, sort: Option<String>) -> Self {
        self.sort = sort;
        self
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
            number: self.number,
        }
    }

    /// Converts the content while keeping page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            sort: self.sort,
        }
    }

    /// Fallible variant of [`Page::map`].
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            content: self.content.into_iter().map(f).collect::<Result<_, _>>()?,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            sort: self.sort,
        })
    }
}

/// Cuts `size` elements starting at `offset` out of a full ordered sequence.
///
/// An offset at or past the end yields an empty slice, and the upper bound is clamped
/// to the sequence length.
///
/// # Returns
/// - `(content, total)` - The subsequence and the length of the full sequence
pub fn slice<T>(full: Vec<T>, offset: u64, size: u64) -> (Vec<T>, u64) {
    let total = full.len() as u64;
    if offset >= total {
        return (Vec::new(), total);
    }

    let end = offset.saturating_add(size).min(total);
    let content = full
        .into_iter()
        .skip(offset as usize)
        .take((end - offset) as usize)
        .collect();

    (content, total)
}

/// Pages a full in-memory sequence according to `request`.
///
/// The sequence keeps its own order, so the request's sort is not carried over.
pub fn paginate<T>(full: Vec<T>, request: &PageRequest) -> Result<Page<T>, AssemblyError> {
    let (content, total) = slice(full, request.offset(), request.size);
    Page::new(content, request.page, request.size, total)
}
