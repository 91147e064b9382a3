//! Distributed systems theory.

use super::TopicContent;

pub const CAP_THEOREM: TopicContent = TopicContent::new(
    "cap-theorem",
    "CAP Theorem",
    r#"<h3>Definition</h3>
<p>A distributed data store can provide at most two of the following three guarantees at the same time:</p>
<ul>
  <li><strong>Consistency</strong>: every read sees the latest write.</li>
  <li><strong>Availability</strong>: every request to a non-failing node gets a response.</li>
  <li><strong>Partition tolerance</strong>: the system keeps working despite dropped messages between nodes.</li>
</ul>
<p>Because network partitions cannot be ruled out, the practical choice is between <strong>CP</strong> (refuse some requests during a partition) and <strong>AP</strong> (answer with possibly stale data).</p>
<table>
  <tr><th>CP</th><th>AP</th></tr>
  <tr><td>HBase, ZooKeeper, etcd</td><td>Cassandra, DynamoDB, CouchDB</td></tr>
</table>"#,
);

pub const PACELC_THEOREM: TopicContent = TopicContent::new(
    "pacelc-theorem",
    "PACELC Theorem",
    r#"<h3>Definition</h3>
<p>PACELC extends CAP: if there is a <strong>P</strong>artition, choose <strong>A</strong>vailability or <strong>C</strong>onsistency; <strong>E</strong>lse, choose <strong>L</strong>atency or <strong>C</strong>onsistency.</p>
<ul>
  <li>PA/EL: Cassandra, DynamoDB (favour speed everywhere).</li>
  <li>PC/EC: traditional RDBMS clusters, Spanner.</li>
  <li>PA/EC: MongoDB with majority reads.</li>
</ul>
<p>It captures the everyday latency cost of strong consistency, not only the failure case.</p>"#,
);

pub const CONSISTENT_HASHING: TopicContent = TopicContent::new(
    "consistent-hashing",
    "Consistent Hashing",
    r#"<h3>Definition</h3>
<p>Keys and nodes are hashed onto the same ring; a key belongs to the first node clockwise from its position. Adding or removing a node only moves the keys in one arc of the ring.</p>
<h3>Virtual nodes</h3>
<p>Each physical node is placed on the ring many times to even out load and to spread the keys of a failed node across many survivors.</p>
<pre><code class="language-python">def node_for(key, ring):
    h = hash(key)
    for point, node in ring:  # ring sorted by point
        if h &lt;= point:
            return node
    return ring[0][1]</code></pre>
<p>Used by DynamoDB, Cassandra, Memcached clients and CDN request routing.</p>"#,
);

pub const VECTOR_CLOCKS: TopicContent = TopicContent::new(
    "vector-clocks",
    "Vector Clocks",
    r#"<h3>Definition</h3>
<p>A vector clock is a list of counters, one per node, attached to each version of a value. It captures causality between events without synchronized physical clocks.</p>
<ul>
  <li>On a local event a node increments its own counter.</li>
  <li>On receiving a message it takes the element-wise maximum, then increments its own counter.</li>
  <li>Version A happened-before B if every counter in A is less than or equal to B and at least one is smaller.</li>
  <li>If neither dominates, the versions are <strong>concurrent</strong> and must be reconciled.</li>
</ul>
<p>Compare with Lamport timestamps, which give a total order but cannot detect concurrency.</p>"#,
);

pub const RAFT_CONSENSUS: TopicContent = TopicContent::new(
    "raft-consensus",
    "Raft Consensus",
    r#"<h3>Definition</h3>
<p>Raft keeps a replicated log identical across a cluster so that every node applies the same commands in the same order.</p>
<ul>
  <li><strong>Leader election</strong>: followers that miss heartbeats become candidates and request votes for a new term.</li>
  <li><strong>Log replication</strong>: the leader appends entries and commits them once a majority has stored them.</li>
  <li><strong>Safety</strong>: a candidate cannot win unless its log is at least as up to date as a majority's.</li>
</ul>
<p>A cluster of 2f + 1 nodes tolerates f failures. Used by etcd, Consul and CockroachDB; Paxos solves the same problem with a harder-to-follow protocol.</p>"#,
);

pub const EVENTUAL_CONSISTENCY: TopicContent = TopicContent::new(
    "eventual-consistency",
    "Eventual Consistency",
    r#"<h3>Definition</h3>
<p>If no new writes arrive, all replicas eventually converge to the same value. Reads in the meantime may be stale.</p>
<h3>Stronger session guarantees</h3>
<ul>
  <li>Read-your-writes</li>
  <li>Monotonic reads</li>
  <li>Monotonic writes</li>
  <li>Writes-follow-reads</li>
</ul>
<p>Convergence mechanisms include last-write-wins, vector clocks with application merge, and CRDTs.</p>"#,
);

pub const TWO_PHASE_COMMIT: TopicContent = TopicContent::new(
    "two-phase-commit",
    "Two-Phase Commit",
    r#"<h3>Definition</h3>
<p>2PC is an atomic commitment protocol across several participants coordinated by one node.</p>
<ol>
  <li><strong>Prepare</strong>: the coordinator asks every participant to vote; a yes vote means the participant can commit no matter what.</li>
  <li><strong>Commit / abort</strong>: if all voted yes the coordinator broadcasts commit, otherwise abort.</li>
</ol>
<h3>Weaknesses</h3>
<ul>
  <li>Blocking: participants hold locks if the coordinator dies after prepare.</li>
  <li>Latency of two round trips.</li>
</ul>
<p>Microservices usually prefer the <strong>Saga</strong> pattern with compensating actions.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    CAP_THEOREM,
    PACELC_THEOREM,
    CONSISTENT_HASHING,
    VECTOR_CLOCKS,
    RAFT_CONSENSUS,
    EVENTUAL_CONSISTENCY,
    TWO_PHASE_COMMIT,
];
