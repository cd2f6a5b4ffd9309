/*!
This crate provides a generalized online suffix-tree index for text,
implemented in Rust.

The index is built incrementally with Ukkonen's algorithm, extended to
multiple strings by joining them under unique per-string terminators. After
ingesting strings of summed length n it answers queries in time proportional
to the query length, using O(n) space:

- [`SuffixTree::contains`]: substring membership in O(m)
- [`SuffixTree::occurrences`]: occurrence counting in O(m + k)
- [`SuffixTree::find_all`]: lazy enumeration of every occurrence as
  `(string id, offset)` pairs in O(m + k)
- [`SuffixTree::to_dot`]: Graphviz rendering of the tree for debugging

where m is the query length and k the number of occurrences.

# Usage Example

```rust
use suffix_index::SuffixTree;

let mut tree = SuffixTree::new();
let first = tree.insert_string("banan").expect("insert should succeed");
let second = tree.insert_string("ananas").expect("insert should succeed");

assert!(tree.contains("nan"));
assert_eq!(tree.occurrences("an"), 4);

let mut hits: Vec<_> = tree.find_all("an").collect();
hits.sort();
assert_eq!(hits, vec![(first, 1), (first, 3), (second, 0), (second, 2)]);
```

# Features
- Online construction: strings can be inserted at any time, interleaved
  with queries, and the tree stays linear in the total input length
- Opaque, ordered string ids mapping hits back to their source string
- Arena-backed node store with stable handles; no ownership cycles
- Comprehensive test suite including property-based invariant checks

Code points in `U+2980..=U+2AFF` are reserved for the per-string
terminators; inserted strings must not contain them.
*/

pub mod error;
pub mod tree;

pub use error::{Result, SuffixTreeError};
pub use tree::{
    EdgeEnd, FindAll, Node, NodeId, Nodes, StringId, StringRecord, SuffixTree,
    RESERVED_RANGE_END, RESERVED_RANGE_START,
};
