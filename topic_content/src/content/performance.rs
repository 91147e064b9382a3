//! Performance and reliability.

use super::TopicContent;

pub const RATE_LIMITING: TopicContent = TopicContent::new(
    "rate-limiting",
    "Rate Limiting",
    r#"<h3>Algorithms</h3>
<table>
  <tr><th>Algorithm</th><th>Behaviour</th></tr>
  <tr><td>Token bucket</td><td>Tokens refill at a fixed rate; bursts up to bucket size</td></tr>
  <tr><td>Leaky bucket</td><td>Requests drain at a constant rate; smooths bursts</td></tr>
  <tr><td>Fixed window counter</td><td>Simple; allows double bursts at window edges</td></tr>
  <tr><td>Sliding window log</td><td>Exact; stores a timestamp per request</td></tr>
  <tr><td>Sliding window counter</td><td>Weighted blend of two windows; cheap and accurate enough</td></tr>
</table>
<p>Distributed limiters keep counters in Redis with atomic scripts. Return <code>429 Too Many Requests</code> with a <code>Retry-After</code> header.</p>"#,
);

pub const CACHE_EVICTION_POLICIES: TopicContent = TopicContent::new(
    "cache-eviction-policies",
    "Cache Eviction Policies",
    r#"<ul>
  <li><strong>LRU</strong>: evict the least recently used entry; hash map plus doubly linked list gives O(1).</li>
  <li><strong>LFU</strong>: evict the least frequently used entry; resists scans, slow to adapt.</li>
  <li><strong>FIFO</strong>: evict the oldest insertion.</li>
  <li><strong>Random</strong>: surprisingly competitive, no bookkeeping.</li>
  <li><strong>TTL</strong>: expire entries after a fixed lifetime.</li>
  <li><strong>ARC / W-TinyLFU</strong>: adaptive blends of recency and frequency.</li>
</ul>"#,
);

pub const CACHING_STRATEGIES: TopicContent = TopicContent::new(
    "caching-strategies",
    "Caching Strategies",
    r#"<table>
  <tr><th>Pattern</th><th>Read path</th><th>Write path</th></tr>
  <tr><td>Cache-aside</td><td>App checks cache, loads from DB on miss</td><td>App writes DB, invalidates cache</td></tr>
  <tr><td>Read-through</td><td>Cache loads from DB on miss</td><td>Same as cache-aside</td></tr>
  <tr><td>Write-through</td><td>Cache</td><td>Cache writes DB synchronously</td></tr>
  <tr><td>Write-behind</td><td>Cache</td><td>Cache writes DB asynchronously</td></tr>
</table>
<p>Watch for thundering herds on hot-key expiry: use request coalescing or jittered TTLs.</p>"#,
);

pub const CIRCUIT_BREAKER: TopicContent = TopicContent::new(
    "circuit-breaker",
    "Circuit Breaker",
    r#"<h3>States</h3>
<ul>
  <li><strong>Closed</strong>: calls pass through; failures are counted.</li>
  <li><strong>Open</strong>: after a failure threshold, calls fail fast for a cool-down period.</li>
  <li><strong>Half-open</strong>: a few trial calls decide whether to close again or reopen.</li>
</ul>
<p>Prevents cascading failures and gives a struggling dependency time to recover. Combine with timeouts, retries with exponential backoff and bulkheads.</p>"#,
);

pub const BACKPRESSURE: TopicContent = TopicContent::new(
    "backpressure",
    "Backpressure",
    r#"<h3>Definition</h3>
<p>Backpressure is how a slow consumer signals a fast producer to slow down instead of letting queues grow without bound.</p>
<ul>
  <li>Bounded queues that block or reject when full.</li>
  <li>Credit or window based flow control (TCP receive window, Reactive Streams request(n)).</li>
  <li>Load shedding: drop low-priority work under pressure.</li>
</ul>"#,
);

pub const LATENCY_PERCENTILES: TopicContent = TopicContent::new(
    "latency-percentiles",
    "Latency Percentiles (p50/p95/p99)",
    r#"<h3>Definition</h3>
<p>The pN latency is the value below which N% of requests complete. Averages hide the tail; percentiles expose it.</p>
<ul>
  <li>p50: the typical user experience.</li>
  <li>p99: one request in a hundred is slower than this; with fan-out, most users hit it.</li>
</ul>
<p>Percentiles cannot be averaged across hosts; aggregate histograms (HDR, t-digest) instead.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    RATE_LIMITING,
    CACHE_EVICTION_POLICIES,
    CACHING_STRATEGIES,
    CIRCUIT_BREAKER,
    BACKPRESSURE,
    LATENCY_PERCENTILES,
];
