//!
//! The reference MST algorithm implementations.
//!

/// The naive Kruskal implementation.
pub const KRUSKAL_SIMPLE: &str = "KruskalSimple";

/// Kruskal with a union-find structure.
pub const KRUSKAL_UNION_FIND: &str = "KruskalUnionFind";

/// Kruskal with a path-compressed union-find structure.
pub const KRUSKAL_UNION_FIND_COMPRESSED: &str = "KruskalUnionFindCompressed";

/// Prim with a binary heap.
pub const PRIM_BINARY_HEAP: &str = "PrimBinaryHeap";

/// Prim with a k-ary heap.
pub const PRIM_K_HEAP: &str = "PrimKHeap";

/// All reference implementations in reporting order.
pub const ALL: [&str; 5] = [
    KRUSKAL_SIMPLE,
    KRUSKAL_UNION_FIND,
    KRUSKAL_UNION_FIND_COMPRESSED,
    PRIM_BINARY_HEAP,
    PRIM_K_HEAP,
];

/// The default comparisons, `(reference, candidate)`.
pub const COMPARISONS: [(&str, &str); 9] = [
    (KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND),
    (KRUSKAL_SIMPLE, KRUSKAL_UNION_FIND_COMPRESSED),
    (KRUSKAL_SIMPLE, PRIM_BINARY_HEAP),
    (KRUSKAL_UNION_FIND, KRUSKAL_UNION_FIND_COMPRESSED),
    (PRIM_BINARY_HEAP, KRUSKAL_UNION_FIND),
    (PRIM_BINARY_HEAP, KRUSKAL_UNION_FIND_COMPRESSED),
    (PRIM_BINARY_HEAP, PRIM_K_HEAP),
    (PRIM_K_HEAP, KRUSKAL_UNION_FIND),
    (PRIM_K_HEAP, KRUSKAL_UNION_FIND_COMPRESSED),
];
