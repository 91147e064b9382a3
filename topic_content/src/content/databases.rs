//! Database fundamentals.

use super::TopicContent;

pub const ACID_PROPERTIES: TopicContent = TopicContent::new(
    "acid-properties",
    "ACID Properties",
    r#"<h3>Definition</h3>
<p>ACID is the set of guarantees a transactional database gives so that a group of operations behaves like a single, reliable unit of work.</p>
<ul>
  <li><strong>Atomicity</strong>: all statements in a transaction commit, or none do.</li>
  <li><strong>Consistency</strong>: a transaction moves the database from one valid state to another; constraints always hold.</li>
  <li><strong>Isolation</strong>: concurrent transactions do not observe each other's partial work (see isolation levels).</li>
  <li><strong>Durability</strong>: once committed, data survives crashes, usually via a write-ahead log.</li>
</ul>
<h3>Example</h3>
<pre><code class="language-sql">BEGIN;
UPDATE accounts SET balance = balance - 100 WHERE id = 1;
UPDATE accounts SET balance = balance + 100 WHERE id = 2;
COMMIT;</code></pre>
<h3>Interview tip</h3>
<p>Contrast with BASE (Basically Available, Soft state, Eventual consistency) used by many NoSQL stores.</p>"#,
);

pub const DATABASE_INDEXING: TopicContent = TopicContent::new(
    "database-indexing",
    "Database Indexing",
    r#"<h3>Definition</h3>
<p>An index is an auxiliary data structure that lets the database find rows without scanning the whole table.</p>
<table>
  <tr><th>Index type</th><th>Best for</th></tr>
  <tr><td>B-Tree</td><td>Equality and range queries, ORDER BY</td></tr>
  <tr><td>Hash</td><td>Exact-match lookups</td></tr>
  <tr><td>GIN / inverted</td><td>Full-text search, arrays, JSON</td></tr>
  <tr><td>Composite</td><td>Queries filtering on a left-most prefix of columns</td></tr>
</table>
<h3>Trade-offs</h3>
<ul>
  <li>Faster reads, slower writes: every insert or update must maintain the index.</li>
  <li>Extra storage per index.</li>
  <li>Low-cardinality columns rarely benefit.</li>
</ul>
<pre><code class="language-sql">CREATE INDEX idx_orders_customer_created
    ON orders (customer_id, created_at);</code></pre>"#,
);

pub const DATABASE_NORMALIZATION: TopicContent = TopicContent::new(
    "database-normalization",
    "Database Normalization",
    r#"<h3>Definition</h3>
<p>Normalization organises relational tables to remove redundancy and update anomalies.</p>
<ul>
  <li><strong>1NF</strong>: atomic column values, no repeating groups.</li>
  <li><strong>2NF</strong>: 1NF and every non-key column depends on the whole primary key.</li>
  <li><strong>3NF</strong>: 2NF and no transitive dependencies between non-key columns.</li>
  <li><strong>BCNF</strong>: every determinant is a candidate key.</li>
</ul>
<h3>Denormalization</h3>
<p>Read-heavy systems often denormalize deliberately (duplicated columns, materialized views) to avoid expensive joins, accepting more complex writes.</p>"#,
);

pub const DATABASE_SHARDING: TopicContent = TopicContent::new(
    "database-sharding",
    "Database Sharding",
    r#"<h3>Definition</h3>
<p>Sharding splits one logical dataset across multiple database nodes so that each node stores and serves a subset of the rows.</p>
<h3>Strategies</h3>
<ul>
  <li><strong>Range-based</strong>: shard by key ranges; simple but prone to hot spots.</li>
  <li><strong>Hash-based</strong>: shard by hash(key) mod N; even spread, painful resharding.</li>
  <li><strong>Consistent hashing</strong>: minimises data movement when nodes join or leave.</li>
  <li><strong>Directory-based</strong>: a lookup service maps keys to shards.</li>
</ul>
<h3>Challenges</h3>
<ul>
  <li>Cross-shard joins and transactions.</li>
  <li>Rebalancing and hot partitions.</li>
  <li>Choosing a shard key that matches access patterns.</li>
</ul>"#,
);

pub const DATABASE_REPLICATION: TopicContent = TopicContent::new(
    "database-replication",
    "Database Replication",
    r#"<h3>Definition</h3>
<p>Replication keeps copies of the same data on several nodes for availability, durability and read scaling.</p>
<table>
  <tr><th>Topology</th><th>Notes</th></tr>
  <tr><td>Leader-follower</td><td>Writes go to the leader; followers serve reads and may lag.</td></tr>
  <tr><td>Multi-leader</td><td>Writes accepted in several regions; needs conflict resolution.</td></tr>
  <tr><td>Leaderless</td><td>Quorum reads and writes (R + W &gt; N), as in Dynamo-style stores.</td></tr>
</table>
<p><strong>Synchronous</strong> replication trades latency for zero data loss; <strong>asynchronous</strong> replication is faster but can lose the most recent writes on failover.</p>"#,
);

pub const SQL_VS_NOSQL: TopicContent = TopicContent::new(
    "sql-vs-nosql",
    "SQL vs NoSQL",
    r#"<h3>Comparison</h3>
<table>
  <tr><th></th><th>SQL</th><th>NoSQL</th></tr>
  <tr><td>Schema</td><td>Fixed, enforced</td><td>Flexible or schemaless</td></tr>
  <tr><td>Scaling</td><td>Mostly vertical, read replicas</td><td>Horizontal by design</td></tr>
  <tr><td>Transactions</td><td>Full ACID</td><td>Often limited to a single document or partition</td></tr>
  <tr><td>Query</td><td>Declarative SQL with joins</td><td>Key, document, column or graph APIs</td></tr>
</table>
<h3>NoSQL families</h3>
<ul>
  <li>Key-value: Redis, DynamoDB</li>
  <li>Document: MongoDB, Couchbase</li>
  <li>Wide-column: Cassandra, HBase</li>
  <li>Graph: Neo4j</li>
</ul>"#,
);

pub const ALL: &[TopicContent] = &[
    ACID_PROPERTIES,
    DATABASE_INDEXING,
    DATABASE_NORMALIZATION,
    DATABASE_SHARDING,
    DATABASE_REPLICATION,
    SQL_VS_NOSQL,
];
