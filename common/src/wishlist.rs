use serde::{Deserialize, Serialize};

/// Component kinds a business wants to be told about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<String>,
}

impl Wishlist {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Append a trimmed item. Blank input is ignored and returns false.
    pub fn add(&mut self, item: &str) -> bool {
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    /// Remove the first item equal to `item`.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_items_are_ignored() {
        let mut list = Wishlist::default();
        assert!(!list.add("   "));
        assert!(list.add("  SSD Drives "));
        assert_eq!(list.items(), ["SSD Drives".to_string()]);
    }

    #[test]
    fn remove_first_match_only() {
        let mut list = Wishlist::new(vec!["RAM".into(), "GPU".into(), "RAM".into()]);
        assert!(list.remove("RAM"));
        assert_eq!(list.items(), ["GPU".to_string(), "RAM".to_string()]);
        assert!(!list.remove("PSU"));
    }
}
