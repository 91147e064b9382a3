//! Data structures and algorithms.

use super::TopicContent;

pub const BIG_O_NOTATION: TopicContent = TopicContent::new(
    "big-o-notation",
    "Big O Notation",
    r#"<h3>Common complexities</h3>
<table>
  <tr><th>Class</th><th>Example</th></tr>
  <tr><td>O(1)</td><td>Hash map lookup</td></tr>
  <tr><td>O(log n)</td><td>Binary search, balanced tree lookup</td></tr>
  <tr><td>O(n)</td><td>Linear scan</td></tr>
  <tr><td>O(n log n)</td><td>Merge sort, heap sort</td></tr>
  <tr><td>O(n<sup>2</sup>)</td><td>Nested loops, bubble sort</td></tr>
  <tr><td>O(2<sup>n</sup>)</td><td>Naive subset enumeration</td></tr>
</table>
<p>Big O bounds growth from above; quote average and worst case separately when they differ (quicksort, hash tables).</p>"#,
);

pub const BLOOM_FILTERS: TopicContent = TopicContent::new(
    "bloom-filters",
    "Bloom Filters",
    r#"<h3>Definition</h3>
<p>A probabilistic set of <em>m</em> bits and <em>k</em> hash functions. Insert sets k bits; a lookup answers "definitely not present" or "probably present".</p>
<ul>
  <li>No false negatives, tunable false-positive rate.</li>
  <li>Cannot delete (counting Bloom filters can).</li>
  <li>Optimal k = (m / n) ln 2.</li>
</ul>
<p>Used by LSM-tree databases to skip SSTables, by CDNs and by web crawlers to avoid revisiting URLs.</p>"#,
);

pub const B_TREES_VS_LSM_TREES: TopicContent = TopicContent::new(
    "b-trees-vs-lsm-trees",
    "B-Trees vs LSM Trees",
    r#"<table>
  <tr><th></th><th>B-Tree</th><th>LSM Tree</th></tr>
  <tr><td>Writes</td><td>In place, random I/O</td><td>Append to memtable, flush sorted runs</td></tr>
  <tr><td>Reads</td><td>One tree traversal</td><td>May check several levels (Bloom filters help)</td></tr>
  <tr><td>Amplification</td><td>Write amplification from page rewrites</td><td>Compaction rewrites data repeatedly</td></tr>
  <tr><td>Used by</td><td>PostgreSQL, MySQL InnoDB</td><td>RocksDB, Cassandra, LevelDB</td></tr>
</table>"#,
);

pub const TRIES: TopicContent = TopicContent::new(
    "tries",
    "Tries",
    r#"<h3>Definition</h3>
<p>A prefix tree stores strings character by character so that all keys sharing a prefix share a path from the root.</p>
<ul>
  <li>Insert and lookup in O(L) for a key of length L.</li>
  <li>Natural fit for autocomplete and prefix search.</li>
  <li>Radix trees compress single-child chains to save memory.</li>
</ul>
<pre><code class="language-python">class Node:
    def __init__(self):
        self.children = {}
        self.terminal = False</code></pre>"#,
);

pub const MERKLE_TREES: TopicContent = TopicContent::new(
    "merkle-trees",
    "Merkle Trees",
    r#"<h3>Definition</h3>
<p>A tree where each leaf is the hash of a data block and each inner node is the hash of its children. The root hash fingerprints the whole dataset.</p>
<ul>
  <li>Two replicas find differing ranges by comparing hashes top-down (anti-entropy in Dynamo and Cassandra).</li>
  <li>Membership proofs need only O(log n) hashes (blockchains, certificate transparency).</li>
  <li>Git stores its object graph the same way.</li>
</ul>"#,
);

pub const HYPERLOGLOG: TopicContent = TopicContent::new(
    "hyperloglog",
    "HyperLogLog",
    r#"<h3>Definition</h3>
<p>A probabilistic cardinality estimator that counts distinct elements using a few kilobytes of memory.</p>
<ul>
  <li>Hash each element; track the longest run of leading zeros per register.</li>
  <li>Standard error about 1.04 / sqrt(m) for m registers.</li>
  <li>Registers merge by taking the maximum, so counts combine across shards.</li>
</ul>
<p>Redis exposes it as <code>PFADD</code> / <code>PFCOUNT</code>.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    BIG_O_NOTATION,
    BLOOM_FILTERS,
    B_TREES_VS_LSM_TREES,
    TRIES,
    MERKLE_TREES,
    HYPERLOGLOG,
];
