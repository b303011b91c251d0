use crate::domain::{Category, CategoryBucket, ClassifiedItem};

/// One bucket per category, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBuckets {
    buckets: Vec<CategoryBucket>,
}

impl CategoryBuckets {
    pub fn new() -> Self {
        CategoryBuckets {
            buckets: Category::ALL.iter().map(|c| CategoryBucket::new(*c)).collect(),
        }
    }

    /// Add an item to its category's bucket.
    ///
    /// Items with an empty description, or a description already present in
    /// the bucket, are dropped. Returns whether the item was kept.
    pub fn insert(&mut self, item: ClassifiedItem) -> bool {
        if item.description.is_empty() {
            return false;
        }
        let index = item.category.index();
        self.buckets[index].push(item)
    }

    pub fn bucket(&self, category: Category) -> &CategoryBucket {
        &self.buckets[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets.iter()
    }

    /// True when no category, `other` included, holds an item.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(CategoryBucket::is_empty)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(CategoryBucket::len).sum()
    }
}

impl Default for CategoryBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<ClassifiedItem> for CategoryBuckets {
    fn from_iter<I: IntoIterator<Item = ClassifiedItem>>(iter: I) -> Self {
        let mut buckets = CategoryBuckets::new();
        for item in iter {
            buckets.insert(item);
        }
        buckets
    }
}

/// Group classified items by category, keeping the first item per description.
pub fn aggregate(items: impl IntoIterator<Item = ClassifiedItem>) -> CategoryBuckets {
    items.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: Category, description: &str) -> ClassifiedItem {
        ClassifiedItem::new(category, description, description)
    }

    #[test]
    fn test_new_has_every_category_empty() {
        let buckets = CategoryBuckets::new();
        assert!(buckets.is_empty());
        assert_eq!(buckets.iter().count(), 7);
        for category in Category::ALL {
            assert_eq!(buckets.bucket(category).category(), category);
        }
    }

    #[test]
    fn test_dedup_per_bucket() {
        let buckets = aggregate(vec![
            ClassifiedItem::new(Category::Features, "Login", "feat: login"),
            ClassifiedItem::new(Category::Features, "Login", "add: login"),
            ClassifiedItem::new(Category::Features, "Logout", "feat: logout"),
        ]);
        let features = buckets.bucket(Category::Features);
        assert_eq!(features.len(), 2);
        assert_eq!(features.items()[0].subject, "feat: login");
        assert_eq!(features.descriptions().collect::<Vec<_>>(), vec!["Login", "Logout"]);
    }

    #[test]
    fn test_same_description_in_different_buckets() {
        let buckets = aggregate(vec![
            item(Category::Features, "Same"),
            item(Category::Other, "Same"),
        ]);
        assert_eq!(buckets.bucket(Category::Features).len(), 1);
        assert_eq!(buckets.bucket(Category::Other).len(), 1);
        assert_eq!(buckets.total(), 2);
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let mut buckets = CategoryBuckets::new();
        assert!(!buckets.insert(item(Category::Other, "")));
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_other_counts_toward_non_empty() {
        let buckets = aggregate(vec![item(Category::Other, "Tweak colors")]);
        assert!(!buckets.is_empty());
    }
}
