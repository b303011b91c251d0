use crate::domain::Category;

/// A commit subject after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    pub category: Category,
    pub description: String,
    /// Subject the description was derived from; kept for tracing, never rendered
    pub subject: String,
}

impl ClassifiedItem {
    pub fn new(category: Category, description: impl Into<String>, subject: impl Into<String>) -> Self {
        ClassifiedItem {
            category,
            description: description.into(),
            subject: subject.into(),
        }
    }
}

/// Ordered items of one category, unique by description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    category: Category,
    items: Vec<ClassifiedItem>,
}

impl CategoryBucket {
    pub fn new(category: Category) -> Self {
        CategoryBucket {
            category,
            items: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn items(&self) -> &[ClassifiedItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append `item` unless an item with the same description is already present.
    ///
    /// Returns whether the item was added.
    pub fn push(&mut self, item: ClassifiedItem) -> bool {
        if self
            .items
            .iter()
            .any(|existing| existing.description == item.description)
        {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.description.as_str())
    }
}
