//! Prefix tree over digit strings
//!
//! Each node has one child slot per digit 0-9. Lookups walk one node per
//! key character, so every operation is O(key length) regardless of how many
//! records are stored.

use super::errors::{TrieError, TrieResult};

/// Number of children per node (digits 0-9)
const RADIX: usize = 10;

#[derive(Debug)]
struct TrieNode<T> {
    children: [Option<Box<TrieNode<T>>>; RADIX],
    item: Option<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: Default::default(),
            item: None,
        }
    }

    /// True if neither this node nor any child holds anything
    fn is_dead(&self) -> bool {
        self.item.is_none() && self.children.iter().all(Option::is_none)
    }
}

fn digit(byte: u8) -> Option<usize> {
    byte.is_ascii_digit().then(|| (byte - b'0') as usize)
}

/// A prefix tree storing at most one record per digit string.
///
/// Deleting a record leaves its routing nodes in place. They are reused by
/// later inserts on the same path and can be reclaimed with [`compact`].
///
/// [`compact`]: DigitTrie::compact
#[derive(Debug)]
pub struct DigitTrie<T> {
    root: Box<TrieNode<T>>,
    /// Live records
    len: usize,
    /// Allocated nodes, root excluded
    nodes: usize,
}

impl<T> Default for DigitTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DigitTrie<T> {
    /// Creates an empty trie
    pub fn new() -> Self {
        Self {
            root: Box::new(TrieNode::new()),
            len: 0,
            nodes: 0,
        }
    }

    /// Insert a record at `key`.
    ///
    /// Fails if the key holds a record already; the existing record is kept.
    /// A key with a non-digit character is rejected before any node is created.
    pub fn insert(&mut self, key: &str, item: T) -> TrieResult<()> {
        if let Some(found) = key.chars().find(|c| !c.is_ascii_digit()) {
            return Err(TrieError::InvalidDigit {
                key: key.to_string(),
                found,
            });
        }

        let mut created = 0;
        let mut current: &mut TrieNode<T> = &mut self.root;
        for byte in key.bytes() {
            let index = (byte - b'0') as usize;
            current = &mut **current.children[index].get_or_insert_with(|| {
                created += 1;
                Box::new(TrieNode::new())
            });
        }

        if current.item.is_some() {
            return Err(TrieError::DuplicateKey(key.to_string()));
        }
        current.item = Some(item);

        self.nodes += created;
        self.len += 1;
        Ok(())
    }

    /// Returns the record stored at exactly `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.find_node(key)?.item.as_ref()
    }

    /// Collect every record whose key starts with `prefix`.
    ///
    /// Returns `None` when the prefix path does not exist or its subtree
    /// holds no records. Result order is unspecified.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<Vec<&T>> {
        let start = self.find_node(prefix)?;

        let mut items = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(item) = &node.item {
                items.push(item);
            }
            stack.extend(node.children.iter().filter_map(|child| child.as_deref()));
        }

        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }

    /// Remove and return the record at `key`.
    ///
    /// Routing nodes on the path are kept.
    pub fn delete(&mut self, key: &str) -> Option<T> {
        let mut current: &mut TrieNode<T> = &mut self.root;
        for byte in key.bytes() {
            current = current.children[digit(byte)?].as_deref_mut()?;
        }

        let removed = current.item.take();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Drop every routing node whose subtree holds no record.
    ///
    /// Returns the number of nodes freed.
    pub fn compact(&mut self) -> usize {
        let freed = Self::prune(&mut self.root);
        self.nodes -= freed;
        freed
    }

    fn prune(node: &mut TrieNode<T>) -> usize {
        let mut freed = 0;
        for slot in node.children.iter_mut() {
            let Some(child) = slot.as_mut() else {
                continue;
            };
            freed += Self::prune(child);
            if child.is_dead() {
                *slot = None;
                freed += 1;
            }
        }
        freed
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode<T>> {
        let mut current: &TrieNode<T> = &self.root;
        for byte in key.bytes() {
            current = current.children[digit(byte)?].as_deref()?;
        }
        Some(current)
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no records are stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, excluding the root
    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<'a>(mut items: Vec<&&'a str>) -> Vec<&'a str> {
        items.sort();
        items.into_iter().copied().collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();
        trie.insert("0123456780", "bob").unwrap();

        assert_eq!(trie.get("0123456789"), Some(&"alice"));
        assert_eq!(trie.get("0123456780"), Some(&"bob"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();

        // Path does not exist
        assert_eq!(trie.get("9999999999"), None);
        // Path exists but ends on a routing node
        assert_eq!(trie.get("01234"), None);
        // Non-digit never matches
        assert_eq!(trie.get("01234x6789"), None);
    }

    #[test]
    fn test_duplicate_key_keeps_original() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();

        let err = trie.insert("0123456789", "mallory").unwrap_err();
        assert_eq!(err, TrieError::DuplicateKey("0123456789".to_string()));
        assert_eq!(trie.get("0123456789"), Some(&"alice"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_invalid_digit_creates_nothing() {
        let mut trie = DigitTrie::new();

        let err = trie.insert("01234x6789", "alice").unwrap_err();
        assert!(matches!(err, TrieError::InvalidDigit { found: 'x', .. }));
        assert_eq!(trie.node_count(), 0);
        assert!(trie.is_empty());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut trie = DigitTrie::new();
        trie.insert("1123456789", "one").unwrap();
        trie.insert("1176543210", "two").unwrap();
        trie.insert("1232167890", "three").unwrap();

        let found = trie.find_by_prefix("11").unwrap();
        assert_eq!(sorted(found), vec!["one", "two"]);

        let found = trie.find_by_prefix("1").unwrap();
        assert_eq!(sorted(found), vec!["one", "three", "two"]);

        assert!(trie.find_by_prefix("48").is_none());
    }

    #[test]
    fn test_empty_prefix_returns_everything() {
        let mut trie = DigitTrie::new();
        trie.insert("1123456789", "one").unwrap();
        trie.insert("9876543210", "two").unwrap();

        assert_eq!(trie.find_by_prefix("").unwrap().len(), 2);
    }

    #[test]
    fn test_full_key_is_a_prefix_of_itself() {
        let mut trie = DigitTrie::new();
        trie.insert("1123456789", "one").unwrap();

        assert_eq!(trie.find_by_prefix("1123456789"), Some(vec![&"one"]));
    }

    #[test]
    fn test_prefix_over_dead_branch_is_not_found() {
        let mut trie = DigitTrie::new();
        trie.insert("5550000001", "one").unwrap();
        trie.delete("5550000001");

        // Routing nodes remain but hold no record
        assert!(trie.find_by_prefix("555").is_none());
    }

    #[test]
    fn test_delete() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();

        assert_eq!(trie.delete("0123456789"), Some("alice"));
        assert_eq!(trie.get("0123456789"), None);
        assert!(trie.is_empty());

        // Second delete is a no-op
        assert_eq!(trie.delete("0123456789"), None);
        assert_eq!(trie.delete("42"), None);
    }

    #[test]
    fn test_delete_keeps_routing_nodes() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();
        assert_eq!(trie.node_count(), 10);

        trie.delete("0123456789");
        assert_eq!(trie.node_count(), 10);

        // Reinsert reuses the existing path
        trie.insert("0123456789", "bob").unwrap();
        assert_eq!(trie.node_count(), 10);
        assert_eq!(trie.get("0123456789"), Some(&"bob"));
    }

    #[test]
    fn test_compact_frees_dead_branches() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();
        trie.insert("0123400000", "bob").unwrap();
        assert_eq!(trie.node_count(), 15);

        trie.delete("0123400000");
        assert_eq!(trie.compact(), 5);
        assert_eq!(trie.node_count(), 10);
        assert_eq!(trie.get("0123456789"), Some(&"alice"));

        // Nothing left to free
        assert_eq!(trie.compact(), 0);
    }

    #[test]
    fn test_compact_empty_trie() {
        let mut trie = DigitTrie::new();
        trie.insert("0123456789", "alice").unwrap();
        trie.delete("0123456789");

        assert_eq!(trie.compact(), 10);
        assert_eq!(trie.node_count(), 0);
        assert!(trie.find_by_prefix("").is_none());
    }
}
