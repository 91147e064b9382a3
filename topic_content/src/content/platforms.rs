//! Standalone technology primers. Each one is served as its own topic.

use super::TopicContent;

pub const KAFKA_ZOOKEEPER: TopicContent = TopicContent::new(
    "kafka-zookeeper-overview",
    "Kafka & Zookeeper Overview",
    r#"<h3>Kafka</h3>
<ul>
  <li>Topics are split into partitions; each partition is an ordered, append-only log.</li>
  <li>Producers choose the partition (key hash); consumers in a group share partitions, one consumer per partition.</li>
  <li>Replication factor and <code>min.insync.replicas</code> decide durability; <code>acks=all</code> waits for the ISR.</li>
  <li>Offsets are committed per consumer group, enabling replay.</li>
</ul>
<h3>ZooKeeper</h3>
<p>Historically stored broker membership, controller election and topic metadata. KRaft mode replaces it with a Raft quorum inside Kafka.</p>
<p><a href="https://kafka.apache.org/documentation/">Kafka documentation</a></p>"#,
);

pub const REDIS_CACHE: TopicContent = TopicContent::new(
    "redis-cache-overview",
    "Redis Cache Overview",
    r#"<h3>Essentials</h3>
<ul>
  <li>In-memory data structure server: strings, hashes, lists, sets, sorted sets, streams, HyperLogLog.</li>
  <li>Single-threaded command execution makes each command atomic.</li>
  <li>Persistence: RDB snapshots and/or AOF append log.</li>
  <li>Eviction policies: <code>allkeys-lru</code>, <code>volatile-ttl</code>, <code>allkeys-lfu</code> and more.</li>
  <li>Scaling: replicas with Sentinel failover, or Redis Cluster with 16384 hash slots.</li>
</ul>
<pre><code class="language-bash">SET session:42 "..." EX 3600
ZADD leaderboard 1500 alice</code></pre>"#,
);

pub const AWS: TopicContent = TopicContent::new(
    "aws-core-services",
    "AWS Core Services",
    r#"<table>
  <tr><th>Need</th><th>Service</th></tr>
  <tr><td>Compute</td><td>EC2, Lambda, ECS, EKS</td></tr>
  <tr><td>Object storage</td><td>S3</td></tr>
  <tr><td>Relational DB</td><td>RDS, Aurora</td></tr>
  <tr><td>Key-value / document</td><td>DynamoDB</td></tr>
  <tr><td>Queues and streams</td><td>SQS, SNS, Kinesis</td></tr>
  <tr><td>CDN and DNS</td><td>CloudFront, Route 53</td></tr>
  <tr><td>Identity</td><td>IAM, Cognito</td></tr>
</table>
<p>Design for failure across Availability Zones; use Regions for disaster recovery and latency.</p>"#,
);

pub const RABBITMQ: TopicContent = TopicContent::new(
    "rabbitmq-overview",
    "RabbitMQ Overview",
    r#"<h3>Model</h3>
<p>Producers publish to an <strong>exchange</strong>; bindings route messages to <strong>queues</strong>; consumers read from queues.</p>
<ul>
  <li>Direct, topic, fanout and headers exchanges.</li>
  <li>Acknowledgements and prefetch control delivery and backpressure.</li>
  <li>Dead-letter exchanges catch rejected or expired messages.</li>
  <li>Quorum queues replicate with Raft.</li>
</ul>
<p>Kafka keeps a replayable log; RabbitMQ deletes messages once acknowledged.</p>"#,
);

pub const DOCKER: TopicContent = TopicContent::new(
    "docker-essentials",
    "Docker Essentials",
    r#"<ul>
  <li>An <strong>image</strong> is a stack of read-only layers; a <strong>container</strong> adds a writable layer on top.</li>
  <li>Order Dockerfile steps from least to most frequently changing to maximise layer cache hits.</li>
  <li>Multi-stage builds keep build tooling out of the runtime image.</li>
  <li>Volumes persist data beyond the container lifecycle.</li>
</ul>
<pre><code class="language-dockerfile">FROM rust:1.80 AS build
WORKDIR /src
COPY . .
RUN cargo build --release

FROM debian:bookworm-slim
COPY --from=build /src/target/release/app /usr/local/bin/app
CMD ["app"]</code></pre>"#,
);

pub const KUBERNETES: TopicContent = TopicContent::new(
    "kubernetes-essentials",
    "Kubernetes Essentials",
    r#"<table>
  <tr><th>Object</th><th>Purpose</th></tr>
  <tr><td>Pod</td><td>One or more co-scheduled containers</td></tr>
  <tr><td>Deployment</td><td>Declarative rolling updates of stateless pods</td></tr>
  <tr><td>StatefulSet</td><td>Stable identity and storage per replica</td></tr>
  <tr><td>Service</td><td>Stable virtual IP and load balancing for pods</td></tr>
  <tr><td>Ingress</td><td>HTTP routing from outside the cluster</td></tr>
  <tr><td>ConfigMap / Secret</td><td>Configuration and credentials</td></tr>
</table>
<p>Controllers run reconcile loops that drive actual state toward desired state stored in etcd.</p>"#,
);

pub const ELASTICSEARCH: TopicContent = TopicContent::new(
    "elasticsearch-overview",
    "Elasticsearch Overview",
    r#"<ul>
  <li>Documents are indexed into an <strong>inverted index</strong> mapping terms to document ids.</li>
  <li>An index is split into primary shards, each with replicas.</li>
  <li>Analyzers tokenize and normalise text at index and query time.</li>
  <li>Relevance scoring uses BM25.</li>
  <li>Near real time: new documents become searchable after a refresh (default one second).</li>
</ul>"#,
);

pub const MONGODB: TopicContent = TopicContent::new(
    "mongodb-overview",
    "MongoDB Overview",
    r#"<ul>
  <li>Document store of BSON documents grouped in collections.</li>
  <li>Replica sets provide automatic failover; write concern and read concern tune consistency.</li>
  <li>Sharding by a shard key across config servers and mongos routers.</li>
  <li>Aggregation pipeline: <code>$match</code>, <code>$group</code>, <code>$lookup</code>, <code>$project</code>.</li>
  <li>Multi-document ACID transactions since 4.0.</li>
</ul>"#,
);

pub const POSTGRESQL: TopicContent = TopicContent::new(
    "postgresql-overview",
    "PostgreSQL Overview",
    r#"<ul>
  <li>MVCC: readers never block writers; old row versions are cleaned up by VACUUM.</li>
  <li>Isolation levels: Read Committed (default), Repeatable Read, Serializable (SSI).</li>
  <li>Index types: B-tree, Hash, GIN, GiST, BRIN.</li>
  <li>Streaming and logical replication.</li>
  <li><code>EXPLAIN ANALYZE</code> shows the executed plan with timings.</li>
</ul>"#,
);

pub const CASSANDRA: TopicContent = TopicContent::new(
    "cassandra-overview",
    "Cassandra Overview",
    r#"<ul>
  <li>Masterless ring with consistent hashing and virtual nodes.</li>
  <li>Tunable consistency per query: ONE, QUORUM, ALL, LOCAL_QUORUM.</li>
  <li>LSM storage engine: commit log, memtable, SSTables, compaction.</li>
  <li>Model tables per query; partition key decides placement, clustering columns decide order.</li>
  <li>Repairs use Merkle trees; hinted handoff covers short outages.</li>
</ul>"#,
);

pub const NGINX: TopicContent = TopicContent::new(
    "nginx-overview",
    "Nginx Overview",
    r#"<ul>
  <li>Event-driven worker processes handle many connections each.</li>
  <li>Roles: static file server, reverse proxy, L7 load balancer, TLS terminator, cache.</li>
</ul>
<pre><code class="language-nginx">upstream api {
    least_conn;
    server 10.0.0.1:8080;
    server 10.0.0.2:8080;
}
server {
    listen 443 ssl;
    location /api/ { proxy_pass http://api; }
}</code></pre>"#,
);

pub const TERRAFORM: TopicContent = TopicContent::new(
    "terraform-overview",
    "Terraform Overview",
    r#"<ul>
  <li>Declarative HCL describing resources from providers (AWS, GCP, Kubernetes...).</li>
  <li><code>plan</code> diffs desired configuration against the state file; <code>apply</code> executes it.</li>
  <li>Remote state with locking (S3 plus DynamoDB, Terraform Cloud) for teams.</li>
  <li>Modules package reusable infrastructure.</li>
</ul>"#,
);

pub const GIT: TopicContent = TopicContent::new(
    "git-essentials",
    "Git Essentials",
    r#"<ul>
  <li>Content-addressed object store: blobs, trees, commits, tags.</li>
  <li>Branches are movable pointers to commits.</li>
  <li>Merge preserves history; rebase rewrites it onto a new base.</li>
  <li><code>git bisect</code> binary-searches history for a regression.</li>
</ul>
<pre><code class="language-bash">git switch -c feature/login
git rebase -i origin/main
git push --force-with-lease</code></pre>"#,
);

pub const LINUX: TopicContent = TopicContent::new(
    "linux-commands",
    "Linux Commands for Debugging",
    r#"<table>
  <tr><th>Question</th><th>Command</th></tr>
  <tr><td>What is using CPU?</td><td><code>top</code>, <code>htop</code>, <code>pidstat</code></td></tr>
  <tr><td>Memory pressure?</td><td><code>free -m</code>, <code>vmstat 1</code></td></tr>
  <tr><td>Disk I/O?</td><td><code>iostat -x 1</code></td></tr>
  <tr><td>Open ports?</td><td><code>ss -tulpn</code></td></tr>
  <tr><td>System calls?</td><td><code>strace -p PID</code></td></tr>
  <tr><td>Log search</td><td><code>journalctl -u svc</code>, <code>grep</code></td></tr>
</table>"#,
);

pub const GRAPHQL: TopicContent = TopicContent::new(
    "graphql-overview",
    "GraphQL Overview",
    r#"<ul>
  <li>Strongly typed schema with queries, mutations and subscriptions.</li>
  <li>Resolvers fetch each field; batch with DataLoader to avoid N+1 queries.</li>
  <li>Single endpoint, so HTTP caching needs persisted queries or client caches.</li>
  <li>Protect the server with depth limits and query cost analysis.</li>
</ul>
<pre><code class="language-graphql">query {
  user(id: 42) { name posts(first: 3) { title } }
}</code></pre>"#,
);

pub const ALL: &[TopicContent] = &[
    KAFKA_ZOOKEEPER,
    REDIS_CACHE,
    AWS,
    RABBITMQ,
    DOCKER,
    KUBERNETES,
    ELASTICSEARCH,
    MONGODB,
    POSTGRESQL,
    CASSANDRA,
    NGINX,
    TERRAFORM,
    GIT,
    LINUX,
    GRAPHQL,
];
