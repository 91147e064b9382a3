//! System design walkthroughs. These are outlines awaiting full write-ups.

use super::TopicContent;

pub const URL_SHORTENER: TopicContent = TopicContent::new(
    "url-shortener",
    "Design a URL Shortener",
    r#"<h3>Outline</h3>
<ul>
  <li>Requirements: create short link, redirect, optional expiry and analytics.</li>
  <li>Key generation: base62 of a counter or a hash prefix with collision check.</li>
  <li>Storage: key-value store keyed by short code.</li>
  <li>Read path: cache hot codes; respond with 301 or 302.</li>
</ul>
<p><em>Full walkthrough coming soon.</em></p>"#,
);

pub const DISTRIBUTED_RATE_LIMITER: TopicContent = TopicContent::new(
    "distributed-rate-limiter",
    "Design a Distributed Rate Limiter",
    r#"<h3>Outline</h3>
<ul>
  <li>Where: API gateway middleware versus a shared service.</li>
  <li>Algorithm: token bucket or sliding window counter.</li>
  <li>State: Redis with atomic Lua scripts; local pre-aggregation to cut round trips.</li>
  <li>Failure mode: fail open or fail closed.</li>
</ul>
<p><em>Full walkthrough coming soon.</em></p>"#,
);

pub const NEWS_FEED: TopicContent = TopicContent::new(
    "news-feed",
    "Design a News Feed",
    r#"<h3>Outline</h3>
<ul>
  <li>Fan-out on write for regular users, fan-out on read for celebrities.</li>
  <li>Feed cache per user holding post ids.</li>
  <li>Ranking service and pagination with cursors.</li>
</ul>
<p><em>Full walkthrough coming soon.</em></p>"#,
);

pub const CHAT_SYSTEM: TopicContent = TopicContent::new(
    "chat-system",
    "Design a Chat System",
    r#"<h3>Outline</h3>
<ul>
  <li>Persistent WebSocket connections to stateful chat servers.</li>
  <li>Service discovery maps users to the server holding their connection.</li>
  <li>Message store partitioned by conversation id, ordered by a per-conversation sequence.</li>
  <li>Presence via heartbeats; offline delivery via push notifications.</li>
</ul>
<p><em>Full walkthrough coming soon.</em></p>"#,
);

pub const ALL: &[TopicContent] = &[
    URL_SHORTENER,
    DISTRIBUTED_RATE_LIMITER,
    NEWS_FEED,
    CHAT_SYSTEM,
];
